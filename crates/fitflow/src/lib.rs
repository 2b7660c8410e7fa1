//! fitflow library — application logic for the fit-reuse pipeline.

pub mod app;
pub mod config;
pub mod errors;
