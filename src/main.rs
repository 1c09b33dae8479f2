//! Front Page Viewer Entry Point

mod app;
mod components;
mod config;
mod display;
mod error;
mod loader;
mod logging;
mod models;
mod store;
mod view_state;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("starting, source {}", config.loader.url());

    mount_to_body(move || view! { <App loader_config=config.loader /> });
}
