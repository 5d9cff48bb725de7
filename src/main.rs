// Logic modules are driven from `web` on wasm32 and from tests natively.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod controls;
mod data;
mod error;
mod i18n;
mod node;
mod prefs;
mod render;
mod scrollspy;
mod state;
mod timer;
#[cfg(target_arch = "wasm32")]
mod web;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    web::start();
}
