use portfolio_web::help::OVERLAY_CLASS;
use portfolio_web::{dom, navigation};
use wasm_bindgen_test::*;

use crate::fixture;

fn overlays() -> usize {
    dom::query_all(&fixture::document(), &format!(".{OVERLAY_CLASS}")).len()
}

fn clear_overlays() {
    for el in dom::query_all(&fixture::document(), &format!(".{OVERLAY_CLASS}")) {
        el.remove();
    }
}

#[wasm_bindgen_test]
async fn help_key_opens_overlay_and_click_dismisses_it() {
    clear_overlays();
    let controller = fixture::controller();
    navigation::handle_key(&controller, "H");
    dom::sleep_ms(20).await.expect("sleep");
    assert_eq!(overlays(), 1);

    let text = dom::query_all(&fixture::document(), &format!(".{OVERLAY_CLASS}"))[0]
        .text_content()
        .unwrap_or_default();
    assert!(text.contains("Competitions"));
    assert!(text.contains("Click anywhere to close"));

    dom::sleep_ms(150).await.expect("sleep");
    fixture::document()
        .body()
        .expect("body")
        .click();
    dom::sleep_ms(400).await.expect("sleep");
    assert_eq!(overlays(), 0);
}

#[wasm_bindgen_test]
async fn click_before_arm_delay_keeps_overlay() {
    clear_overlays();
    let controller = fixture::controller();
    navigation::handle_key(&controller, "h");
    dom::sleep_ms(20).await.expect("sleep");
    fixture::document()
        .body()
        .expect("body")
        .click();
    dom::sleep_ms(400).await.expect("sleep");
    assert_eq!(overlays(), 1);
    clear_overlays();
}

#[wasm_bindgen_test]
fn unbound_keys_do_nothing() {
    clear_overlays();
    let controller = fixture::controller();
    navigation::wire_nav_items(&controller);
    navigation::handle_key(&controller, "9");
    navigation::handle_key(&controller, "x");
    assert!(fixture::is_active("home"));
    assert_eq!(overlays(), 0);
}
