//! GoBoard Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod models;
mod store;

use app::{App, StartupError};
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let message = format!("Invalid configuration: {}", e);
            mount_to_body(move || view! { <StartupError message=message.clone() /> });
            return;
        }
    };

    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    if let Err(e) = rolling_logger::init(config.log_capacity, level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    let api = match api::ApiClient::from_config(&config) {
        Ok(api) => api,
        Err(e) => {
            log::error!("cannot build API client: {}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <StartupError message=message.clone() /> });
            return;
        }
    };
    log::info!("GoBoard client starting, API at {}", api.base());

    mount_to_body(move || view! { <App api=api.clone() config=config.clone() /> });
}
