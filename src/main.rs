#![allow(non_snake_case)]

mod client;
mod config;
mod error;

use dioxus_logger::tracing;

use crate::config::Config;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            Config::default()
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting Shopper UI at {}", client::router::HOME_PATH);

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
