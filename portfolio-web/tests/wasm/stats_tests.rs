use portfolio_core::PageId;
use portfolio_web::{dom, stats};
use wasm_bindgen_test::*;

use crate::fixture;

fn stat_text(id: &str) -> String {
    fixture::by_id(id).text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn counter_climbs_then_restores_original_text() {
    let controller = fixture::controller();
    stats::animate_stats(&controller);
    assert!(controller.borrow().stats_animated());

    dom::sleep_ms(100).await.expect("sleep");
    let midway: u32 = stat_text("stat-projects")
        .parse()
        .expect("intermediate value is a bare number");
    assert!(midway < 150, "got {midway}");

    dom::sleep_ms(2_000).await.expect("sleep");
    assert_eq!(stat_text("stat-projects"), "150+");
    assert_eq!(stat_text("stat-infinite"), "∞");
}

#[wasm_bindgen_test]
async fn animation_runs_only_once() {
    let controller = fixture::controller();
    stats::animate_stats(&controller);
    dom::sleep_ms(2_000).await.expect("sleep");
    assert_eq!(stat_text("stat-projects"), "150+");

    stats::animate_stats(&controller);
    dom::sleep_ms(100).await.expect("sleep");
    assert_eq!(stat_text("stat-projects"), "150+");
}

#[wasm_bindgen_test]
async fn activating_home_schedules_the_animation() {
    let controller = fixture::controller();
    controller
        .borrow_mut()
        .switch_page(&PageId::from("projects"));
    stats::wire_stats(&fixture::document(), &controller);

    dom::sleep_ms(700).await.expect("sleep");
    assert!(!controller.borrow().stats_animated());

    controller.borrow_mut().switch_page(&PageId::from("home"));
    dom::sleep_ms(700).await.expect("sleep");
    assert!(controller.borrow().stats_animated());
}
