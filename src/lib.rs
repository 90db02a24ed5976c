pub mod cli_args;
pub mod config;
pub mod data;
pub mod error;
mod extractor;
mod middleware;
pub mod model;
mod route;
pub mod server;
pub mod service;
pub mod state;
mod types;
mod utils;
pub mod validation;
