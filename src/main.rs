//! Bank Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod pages;
mod routes;
mod session;
mod validation;

use app::App;
use config::{AppConfig, DEFAULT_LOG_LEVEL};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    let level = config.as_ref().map(|c| c.log_level).unwrap_or(DEFAULT_LOG_LEVEL);
    if console_logger::init(level).is_err() {
        log::warn!("logger already installed");
    }
    let config = config.unwrap_or_else(|e| {
        log::error!("invalid build configuration, using defaults: {}", e);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config /> });
}
