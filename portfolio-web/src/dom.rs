use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// All elements matching `selector` in document order.
///
/// An invalid selector or missing document yields an empty list.
#[must_use]
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Like [`query_all`], keeping only elements that are `HtmlElement`s.
#[must_use]
pub fn query_all_html(root: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(root, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// First descendant of `scope` matching `selector`, as an `HtmlElement`.
#[must_use]
pub fn find_html(scope: &Element, selector: &str) -> Option<HtmlElement> {
    scope
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set an inline style property, ignoring rejected values.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("style {property}={value} rejected: {}", js_error_message(&err));
    }
}

/// Current `location.hash`, or an empty string when unavailable.
#[must_use]
pub fn current_fragment() -> String {
    window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default()
}

/// Register a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for {event}: {}", js_error_message(&err));
        return;
    }
    closure.forget();
}

/// Run `tick` every `interval_ms` until the returned handle is cleared.
///
/// The callback lives for the page lifetime; a cleared interval simply stops
/// invoking it.
pub fn every_ms(interval_ms: i32, tick: impl FnMut() + 'static) -> Option<i32> {
    let win = window()?;
    let closure = Closure::<dyn FnMut()>::new(tick);
    let handle = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|err| log::warn!("setInterval failed: {}", js_error_message(&err)))
        .ok()?;
    closure.forget();
    Some(handle)
}

/// Stop an interval started with [`every_ms`].
pub fn clear_every(handle: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(handle);
    }
}

/// Run `task` once after `delay_ms`.
pub fn after_ms(delay_ms: i32, task: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        match sleep_ms(delay_ms).await {
            Ok(()) => task(),
            Err(err) => log::warn!("timer failed: {}", js_error_message(&err)),
        }
    });
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
