#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod clock;
pub mod controller;
pub mod dom;
pub mod effects;
pub mod help;
pub mod navigation;
pub mod stats;
pub mod surface;
pub mod test_bridge;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second init (e.g. test harness) keeps the existing logger.
    let _ = console_log::init_with_level(level);
    if app::mount_page().is_none() {
        log::error!("no browser document; portfolio interactivity disabled");
    }
}
