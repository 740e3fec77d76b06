//! Cosmetic effects: entrance stagger, skill tag ping, and hover styling.
use portfolio_core::numbers::millis_to_timeout;
use portfolio_core::SiteConfig;
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::navigation::PROJECT_CARD_SELECTOR;

pub const PANEL_SELECTOR: &str = ".panel";
pub const SKILL_TAG_SELECTOR: &str = ".skills-tags span";
pub const PROJECT_ICON_SELECTOR: &str = ".project-icon";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-links a";

pub const PING_KEYFRAMES: &str = "@keyframes ping {\n    0% { transform: scale(1); }\n    50% { transform: scale(1.2); }\n    100% { transform: scale(1); }\n}";

const ICON_SPIN: &str = "rotate(360deg) scale(1.2)";
const ICON_REST: &str = "rotate(0deg) scale(1)";
const SOCIAL_GLOW: &str = "0 0 15px rgba(126, 227, 139, 0.4)";

/// Reveal delay for the panel at `index`.
#[must_use]
pub fn entrance_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

pub fn wire_effects(doc: &Document, cfg: &SiteConfig) {
    inject_ping_keyframes(doc);
    stagger_entrance(doc, cfg.entrance_stagger_ms);
    wire_skill_ping(doc, cfg.ping_ms);
    wire_project_hover(doc);
    wire_social_glow(doc);
}

fn inject_ping_keyframes(doc: &Document) {
    let (Some(head), Ok(style)) = (doc.head(), doc.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(PING_KEYFRAMES));
    let _ = head.append_child(&style);
}

/// Hide each `.panel`, then fade it in after its staggered delay.
fn stagger_entrance(doc: &Document, stagger_ms: u32) {
    for (index, panel) in dom::query_all_html(doc, PANEL_SELECTOR)
        .into_iter()
        .enumerate()
    {
        dom::set_style(&panel, "opacity", "0");
        dom::set_style(&panel, "transform", "translateY(20px)");
        let delay = millis_to_timeout(entrance_delay_ms(index, stagger_ms));
        dom::after_ms(delay, move || {
            dom::set_style(&panel, "transition", "all 0.5s ease");
            dom::set_style(&panel, "opacity", "1");
            dom::set_style(&panel, "transform", "translateY(0)");
        });
    }
}

fn wire_skill_ping(doc: &Document, ping_ms: u32) {
    for tag in dom::query_all_html(doc, SKILL_TAG_SELECTOR) {
        let target = tag.clone();
        dom::listen(&tag, "click", move |_event| {
            dom::set_style(&target, "animation", &format!("ping {ping_ms}ms"));
            let target = target.clone();
            dom::after_ms(millis_to_timeout(ping_ms), move || {
                dom::set_style(&target, "animation", "");
            });
        });
    }
}

fn wire_project_hover(doc: &Document) {
    for card in dom::query_all_html(doc, PROJECT_CARD_SELECTOR) {
        let entered = card.clone();
        dom::listen(&card, "mouseenter", move |_event| {
            if let Some(icon) = dom::find_html(&entered, PROJECT_ICON_SELECTOR) {
                dom::set_style(&icon, "transform", ICON_SPIN);
                dom::set_style(&icon, "transition", "transform 0.5s ease");
            }
        });
        let left = card.clone();
        dom::listen(&card, "mouseleave", move |_event| {
            if let Some(icon) = dom::find_html(&left, PROJECT_ICON_SELECTOR) {
                dom::set_style(&icon, "transform", ICON_REST);
            }
        });
    }
}

fn wire_social_glow(doc: &Document) {
    for link in dom::query_all_html(doc, SOCIAL_LINK_SELECTOR) {
        hover_style(&link, "box-shadow", SOCIAL_GLOW, "none");
    }
}

fn hover_style(el: &HtmlElement, property: &'static str, on: &'static str, off: &'static str) {
    let entered = el.clone();
    dom::listen(el, "mouseenter", move |_event| dom::set_style(&entered, property, on));
    let left = el.clone();
    dom::listen(el, "mouseleave", move |_event| dom::set_style(&left, property, off));
}
