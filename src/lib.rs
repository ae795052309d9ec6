pub mod chart;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod utils;
