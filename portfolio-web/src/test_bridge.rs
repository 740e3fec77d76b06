//! `window.__portfolioTest`, exposed when the page URL carries `test=1`.
use portfolio_core::PageId;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::controller::SharedController;
use crate::dom;
use crate::navigation;

pub const BRIDGE_GLOBAL: &str = "__portfolioTest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    pub active: Option<String>,
    pub fragment: String,
    pub breadcrumb: Option<String>,
    pub stats_animated: bool,
}

impl BridgeState {
    #[must_use]
    pub fn capture(controller: &SharedController) -> Self {
        let ctl = controller.borrow();
        Self {
            active: ctl.router().active().map(ToString::to_string),
            fragment: dom::current_fragment(),
            breadcrumb: ctl.breadcrumb_text(),
            stats_animated: ctl.stats_animated(),
        }
    }
}

#[must_use]
pub fn test_mode_enabled() -> bool {
    dom::window()
        .and_then(|win| win.location().search().ok())
        .is_some_and(|search| query_enables_test(&search))
}

/// `true` when the query string carries exactly `test=1`.
#[must_use]
pub fn query_enables_test(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "test=1")
}

/// Attach the bridge object to `window`.
pub fn attach_bridge(controller: &SharedController) {
    let Some(window) = dom::window() else {
        return;
    };

    let state_ctl = controller.clone();
    let state = Closure::<dyn FnMut() -> JsValue>::new(move || {
        serde_wasm_bindgen::to_value(&BridgeState::capture(&state_ctl)).unwrap_or(JsValue::NULL)
    });

    let navigate_ctl = controller.clone();
    let navigate = Closure::<dyn FnMut(JsValue) -> bool>::new(move |value: JsValue| {
        value.as_string().is_some_and(|id| {
            navigate_ctl
                .borrow_mut()
                .switch_page(&PageId::new(id))
                .is_activated()
        })
    });

    let key_ctl = controller.clone();
    let key = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        if let Some(keys) = value.as_string() {
            for ch in keys.chars() {
                navigation::handle_key(&key_ctl, &ch.to_string());
            }
        }
    });

    let bridge = js_sys::Object::new();
    let entries: [(&str, &JsValue); 3] = [
        ("state", state.as_ref()),
        ("navigate", navigate.as_ref()),
        ("key", key.as_ref()),
    ];
    for (name, func) in entries {
        let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str(name), func);
    }
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str(BRIDGE_GLOBAL), &bridge);

    state.forget();
    navigate.forget();
    key.forget();
    log::info!("test bridge attached as window.{BRIDGE_GLOBAL}");
}

#[cfg(test)]
mod tests {
    use super::{BridgeState, query_enables_test};

    #[test]
    fn test_flag_must_match_whole_pair() {
        assert!(query_enables_test("?test=1"));
        assert!(query_enables_test("?lang=en&test=1"));
        assert!(!query_enables_test("?contest=10"));
        assert!(!query_enables_test("?test=10"));
        assert!(!query_enables_test(""));
    }

    #[test]
    fn bridge_state_uses_camel_case_keys() {
        let state = BridgeState {
            active: Some(String::from("projects")),
            fragment: String::from("#projects"),
            breadcrumb: Some(String::from("~/projects")),
            stats_animated: true,
        };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["active"], "projects");
        assert_eq!(value["statsAnimated"], true);
        assert_eq!(value["breadcrumb"], "~/projects");
    }
}
