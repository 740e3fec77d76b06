//! `PageSurface` over the live document.
use portfolio_core::{PageId, PageIndex, PageSurface};
use web_sys::{Document, Element};

use crate::dom;

pub const ACTIVE_CLASS: &str = "active";
/// Any element carrying a page key; the router resolves triggers among these.
pub const TRIGGER_SELECTOR: &str = "[data-page]";
pub const PANEL_SELECTOR: &str = ".page";
pub const BREADCRUMB_ID: &str = "current-path";

/// Elements captured once at start-up, in document order.
pub struct DomSurface {
    triggers: Vec<Element>,
    panels: Vec<Element>,
    breadcrumb: Option<Element>,
}

impl DomSurface {
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        Self {
            triggers: dom::query_all(doc, TRIGGER_SELECTOR),
            panels: dom::query_all(doc, PANEL_SELECTOR),
            breadcrumb: doc.get_element_by_id(BREADCRUMB_ID),
        }
    }

    /// Index keyed by the captured triggers' `data-page` and panels' ids.
    #[must_use]
    pub fn index(&self) -> PageIndex {
        PageIndex::new(
            self.triggers
                .iter()
                .map(|el| el.get_attribute("data-page").unwrap_or_default()),
            self.panels.iter().map(Element::id),
        )
    }

    /// Panel the markup already shows as active, if any.
    #[must_use]
    pub fn initially_active(&self) -> Option<PageId> {
        self.panels
            .iter()
            .find(|el| el.class_list().contains(ACTIVE_CLASS))
            .map(|el| PageId::new(el.id()))
    }

    #[must_use]
    pub fn breadcrumb_text(&self) -> Option<String> {
        self.breadcrumb.as_ref().and_then(|el| el.text_content())
    }
}

fn toggle_active(el: Option<&Element>, active: bool) {
    let Some(el) = el else {
        return;
    };
    let classes = el.class_list();
    let _ = if active {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
}

impl PageSurface for DomSurface {
    fn set_trigger_active(&mut self, slot: usize, active: bool) {
        toggle_active(self.triggers.get(slot), active);
    }

    fn set_panel_active(&mut self, slot: usize, active: bool) {
        toggle_active(self.panels.get(slot), active);
    }

    fn set_breadcrumb(&mut self, text: &str) {
        if let Some(el) = &self.breadcrumb {
            el.set_text_content(Some(text));
        }
    }

    fn write_fragment(&mut self, page: &PageId) -> bool {
        let Some(win) = dom::window() else {
            return false;
        };
        let location = win.location();
        let next = page.fragment();
        if location.hash().ok().as_deref() == Some(next.as_str()) {
            return false;
        }
        match location.set_hash(page.as_str()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!(
                    "could not write fragment for `{page}`: {}",
                    dom::js_error_message(&err)
                );
                false
            }
        }
    }
}
