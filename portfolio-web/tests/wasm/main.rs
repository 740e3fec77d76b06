#![cfg(target_arch = "wasm32")]

mod clock_tests;
mod effects_tests;
mod fixture;
mod help_tests;
mod router_tests;
mod stats_tests;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
