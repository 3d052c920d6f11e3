//! Decor Studio Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod loaders;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    mount_to_body(App);
}
