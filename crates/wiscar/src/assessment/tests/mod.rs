mod bank;
mod common;
mod scoring;
