pub mod confidence;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod infra;
pub mod output;
pub mod parser;
pub mod report;
pub mod server;
pub mod services;
pub mod stats;
