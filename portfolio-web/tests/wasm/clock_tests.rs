use portfolio_web::clock::{self, CLOCK_ID};
use wasm_bindgen_test::*;

use crate::fixture;

#[wasm_bindgen_test]
fn update_writes_hh_mm_ss() {
    fixture::install();
    clock::update_clock(&fixture::document());

    let text = fixture::by_id(CLOCK_ID).text_content().unwrap_or_default();
    assert_eq!(text.len(), 8, "got `{text}`");
    for (idx, ch) in text.chars().enumerate() {
        if idx == 2 || idx == 5 {
            assert_eq!(ch, ':', "got `{text}`");
        } else {
            assert!(ch.is_ascii_digit(), "got `{text}`");
        }
    }
}

#[wasm_bindgen_test]
fn missing_clock_is_skipped() {
    fixture::install();
    let doc = fixture::document();
    fixture::by_id(CLOCK_ID).remove();

    clock::update_clock(&doc);
    assert!(doc.get_element_by_id(CLOCK_ID).is_none());
}
