#![allow(warnings)]
//! Catalog Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod form_state;
mod models;
mod paging;
mod query;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
