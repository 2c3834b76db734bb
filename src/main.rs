#![allow(dead_code)]
//! Inventory Frontend Entry Point

mod api;
mod app;
mod chart_data;
mod components;
mod config;
mod context;
mod error;
mod format;
mod inventory;
mod models;
mod pages;
mod router;
mod session;
mod storage;
mod store;
mod validation;

use app::App;
use config::Theme;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    Theme::load().apply();
    mount_to_body(App);
}
