use portfolio_core::SiteConfig;
use portfolio_core::numbers::millis_to_timeout;
use portfolio_web::{dom, effects};
use wasm_bindgen_test::*;

use crate::fixture;

fn wired() -> SiteConfig {
    fixture::install();
    let cfg = SiteConfig::default();
    effects::wire_effects(&fixture::document(), &cfg);
    cfg
}

#[wasm_bindgen_test]
async fn panels_start_hidden_then_fade_in() {
    let cfg = wired();
    assert_eq!(fixture::style_of("panel-about", "opacity"), "0");
    assert_eq!(fixture::style_of("panel-skills", "opacity"), "0");

    dom::sleep_ms(millis_to_timeout(cfg.entrance_stagger_ms * 2 + 100)).await.expect("sleep");
    assert_eq!(fixture::style_of("panel-about", "opacity"), "1");
    assert_eq!(fixture::style_of("panel-skills", "opacity"), "1");
}

#[wasm_bindgen_test]
async fn skill_click_pings_then_clears() {
    let cfg = wired();
    fixture::by_id("skill-rust").click();
    assert!(fixture::style_of("skill-rust", "animation").contains("ping"));

    dom::sleep_ms(millis_to_timeout(cfg.ping_ms + 200)).await.expect("sleep");
    assert_eq!(fixture::style_of("skill-rust", "animation"), "");
}

#[wasm_bindgen_test]
fn card_hover_spins_and_resets_icon() {
    wired();
    fixture::dispatch("card-2", "mouseenter");
    assert!(fixture::style_of("icon-2", "transform").contains("rotate(360deg)"));

    fixture::dispatch("card-2", "mouseleave");
    assert!(fixture::style_of("icon-2", "transform").contains("rotate(0deg)"));
}

#[wasm_bindgen_test]
fn social_link_glow_sets_and_clears_shadow() {
    wired();
    fixture::dispatch("social-github", "mouseenter");
    assert!(fixture::style_of("social-github", "box-shadow").contains("15px"));

    fixture::dispatch("social-github", "mouseleave");
    assert_eq!(fixture::style_of("social-github", "box-shadow"), "none");
}
