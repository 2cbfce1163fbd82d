#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use tracing::Level;

/// Console log level: verbose while developing, quieter when published
const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

fn main() {
    dioxus::logger::init(LOG_LEVEL).expect("failed to initialize logger");

    tracing::info!("Starting Forge Preview");

    dioxus::launch(app::App);
}
