//! Keyboard help overlay
//!
//! Rendered with yew into a transient root appended to `<body>`. The first
//! document click after a short arm delay fades it out and removes it.
use portfolio_core::numbers::millis_to_timeout;
use portfolio_core::{HelpCfg, HelpContent, HelpEntry};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, Event, HtmlElement};
use yew::prelude::*;
use yew::AppHandle;

use crate::dom;

pub const OVERLAY_CLASS: &str = "help-notification";

const OVERLAY_STYLE: &str = "position:fixed;top:50%;left:50%;transform:translate(-50%,-50%);\
background:rgba(22,27,34,0.98);border:2px solid #7ce38b;border-radius:8px;padding:2rem;\
color:#c9d1d9;font-family:'JetBrains Mono',monospace;font-size:0.85rem;z-index:10000;\
box-shadow:0 20px 60px rgba(0,0,0,0.7);max-width:90%;";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub content: HelpContent,
}

fn entry_row(entry: &HelpEntry) -> Html {
    html! {
        <div class="help-entry">
            <span class="help-key" style="color:#39c5cf;font-weight:bold;">{ entry.key.clone() }</span>
            { format!(" → {}", entry.label) }
        </div>
    }
}

#[function_component(HelpOverlay)]
pub fn help_overlay(props: &Props) -> Html {
    let content = &props.content;
    html! {
        <div role="dialog" aria-label={content.title.clone()}>
            <div class="help-title" style="color:#7ce38b;font-weight:bold;margin-bottom:1.5rem;font-size:1rem;">
                { format!("⌨️  {}", content.title) }
            </div>
            <div class="help-shortcuts" style="line-height:2;">
                { for content.shortcuts.iter().map(entry_row) }
                <div style="margin-top:1rem;">{ entry_row(&content.help_entry) }</div>
            </div>
            <div class="help-links" style="margin-top:1.5rem;padding-top:1rem;border-top:1px solid #30363d;">
                <div style="color:#ffdf5d;font-weight:bold;margin-bottom:0.5rem;">{ "📌 Direct Links:" }</div>
                <div style="color:#8b949e;font-size:0.75rem;">{ content.direct_links.clone() }</div>
            </div>
            <div class="help-dismiss" style="margin-top:1.5rem;text-align:center;color:#8b949e;font-size:0.75rem;">
                { content.dismiss_hint.clone() }
            </div>
        </div>
    }
}

/// Log the shortcut listing and open a new overlay.
pub fn show_help(content: HelpContent, cfg: HelpCfg) {
    log::info!("{}", content.listing());

    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Ok(root) = doc.create_element("div") else {
        return;
    };
    root.set_class_name(OVERLAY_CLASS);
    let _ = root.set_attribute("style", OVERLAY_STYLE);
    if let Err(err) = body.append_child(&root) {
        log::warn!("help overlay not attached: {}", dom::js_error_message(&err));
        return;
    }

    let handle =
        yew::Renderer::<HelpOverlay>::with_root_and_props(root.clone(), Props { content }).render();
    let fade_ms = millis_to_timeout(cfg.fade_ms);
    dom::after_ms(millis_to_timeout(cfg.arm_delay_ms), move || {
        arm_dismiss(root, handle, fade_ms);
    });
}

/// Install the one-shot document click that closes the overlay.
fn arm_dismiss(root: Element, handle: AppHandle<HelpOverlay>, fade_ms: i32) {
    let Some(doc) = dom::document() else {
        return;
    };
    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let dismiss = Closure::once_into_js(move |_event: Event| {
        if let Some(el) = root.dyn_ref::<HtmlElement>() {
            dom::set_style(el, "transition", &format!("opacity {fade_ms}ms ease"));
            dom::set_style(el, "opacity", "0");
        }
        dom::after_ms(fade_ms, move || {
            handle.destroy();
            root.remove();
        });
    });

    if let Err(err) = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "click",
        dismiss.unchecked_ref(),
        &options,
    ) {
        log::warn!("help overlay cannot be dismissed: {}", dom::js_error_message(&err));
    }
}
