//! La Ley del Hielo case portal: web server and browser shell.
//!
//! This crate provides the Leptos-based interface: the navigation shell,
//! the guarded route table, and the browser-side session store.

#![allow(non_snake_case)]

pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod session;
pub mod settings;
#[cfg(feature = "hydrate")]
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
