//! Event wiring for page navigation: trigger clicks, fragment changes,
//! keyboard shortcuts, and project detail buttons.
use portfolio_core::{PageId, Shortcut};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Window};

use crate::controller::SharedController;
use crate::dom;
use crate::help;

pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const DETAIL_BUTTON_SELECTOR: &str = ".view-details-btn";

/// Each `.nav-item` navigates to the page named by its `data-page`.
pub fn wire_nav_items(controller: &SharedController) {
    let items = controller.borrow().nav_items().to_vec();
    for item in items {
        let shared = controller.clone();
        let source = item.clone();
        dom::listen(&item, "click", move |_event| {
            let Some(page) = source.get_attribute("data-page") else {
                return;
            };
            shared.borrow_mut().switch_page(&PageId::new(page));
        });
    }
}

/// Follow the fragment on `hashchange` (back/forward, edited URL).
pub fn wire_fragment_changes(win: &Window, controller: &SharedController) {
    let shared = controller.clone();
    dom::listen(win, "hashchange", move |_event| follow_fragment(&shared));
}

/// Route to whatever the URL fragment names right now.
pub fn follow_fragment(controller: &SharedController) {
    let fragment = dom::current_fragment();
    controller.borrow_mut().on_fragment_change(&fragment);
}

/// Digit keys select navigation items; `h` opens help.
pub fn wire_shortcuts(doc: &Document, controller: &SharedController) {
    let shared = controller.clone();
    dom::listen(doc, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            handle_key(&shared, &key);
        }
    });
}

/// Apply one key press.
///
/// A digit synthesizes a click on the matching navigation item, so it goes
/// through exactly the same handler a pointer click would. The controller
/// borrow is released before clicking because that handler borrows it again.
pub fn handle_key(controller: &SharedController, key: &str) {
    let (shortcut, max_triggers) = {
        let ctl = controller.borrow();
        let max = ctl.config().shortcuts.len();
        (Shortcut::from_key(key, max), max)
    };
    match shortcut {
        Some(Shortcut::SelectTrigger(slot)) => {
            let item = controller.borrow().nav_item(slot);
            match item {
                Some(item) => item.click(),
                None => log::debug!("no navigation item {} of {max_triggers}", slot + 1),
            }
        }
        Some(Shortcut::ShowHelp) => {
            let (content, cfg) = {
                let ctl = controller.borrow();
                (ctl.help_content(), ctl.config().help)
            };
            help::show_help(content, cfg);
        }
        None => {}
    }
}

/// Detail buttons open `project-<id>` without letting the card see the click.
pub fn wire_project_details(doc: &Document, controller: &SharedController) {
    for card in dom::query_all(doc, PROJECT_CARD_SELECTOR) {
        let Some(button) = dom::find_html(&card, DETAIL_BUTTON_SELECTOR) else {
            continue;
        };
        let shared = controller.clone();
        dom::listen(&button, "click", move |event| {
            event.stop_propagation();
            if let Some(page) = project_page(&card) {
                shared.borrow_mut().switch_page(&page);
            }
        });
    }
}

fn project_page(card: &Element) -> Option<PageId> {
    card.get_attribute("data-project")
        .filter(|id| !id.is_empty())
        .map(|id| PageId::project(&id))
}
