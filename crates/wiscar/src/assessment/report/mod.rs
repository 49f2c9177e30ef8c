mod insights;
mod summary;
pub mod views;

pub use summary::ScoreReport;

pub(crate) use insights::generate_insights;
