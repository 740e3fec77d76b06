//! Header clock, refreshed on an interval.
use portfolio_core::ClockReading;
use portfolio_core::numbers::millis_to_timeout;
use web_sys::Document;

use crate::dom;

pub const CLOCK_ID: &str = "clock";

#[must_use]
pub fn now() -> ClockReading {
    let date = js_sys::Date::new_0();
    ClockReading::from_components(date.get_hours(), date.get_minutes(), date.get_seconds())
}

/// Write the current time into `#clock`, if present.
pub fn update_clock(doc: &Document) {
    if let Some(el) = doc.get_element_by_id(CLOCK_ID) {
        el.set_text_content(Some(&now().to_string()));
    }
}

/// Render once immediately, then every `interval_ms`.
pub fn start_clock(doc: &Document, interval_ms: u32) {
    update_clock(doc);
    let doc = doc.clone();
    if dom::every_ms(millis_to_timeout(interval_ms), move || update_clock(&doc)).is_none() {
        log::warn!("clock interval could not be scheduled");
    }
}
