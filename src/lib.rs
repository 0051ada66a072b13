pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

pub fn run() {
    if let Err(error) = cli::run() {
        eprintln!("failed to launch application: {error}");
        std::process::exit(1);
    }
}
