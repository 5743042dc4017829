//! ICU Bed Board Frontend Entry Point

mod app;
mod bed_utils;
mod commands;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(log::LevelFilter::Debug).expect("logger already initialised");
    let api = config::api_config();
    log::info!("starting bed board, service at {}", api.base_url());
    mount_to_body(move || view! { <App api=api /> });
}
