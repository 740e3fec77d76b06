//! Start-up: build the controller once and hand it to every handler.
use portfolio_core::SiteConfig;
use web_sys::{Document, Window};

use crate::controller::{Controller, SharedController};
use crate::{clock, dom, effects, navigation, stats, test_bridge};

/// Wire the whole page. Returns the controller so callers (and tests) can
/// inspect it; handlers hold their own clones.
pub fn mount(win: &Window, doc: &Document, config: SiteConfig) -> SharedController {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::warn!("site configuration rejected ({err}); using defaults");
            SiteConfig::default()
        }
    };

    clock::start_clock(doc, config.clock_interval_ms);

    let controller = Controller::new(doc, config.clone()).into_shared();
    navigation::wire_nav_items(&controller);
    controller
        .borrow_mut()
        .load_from_fragment(&dom::current_fragment());
    navigation::wire_fragment_changes(win, &controller);

    effects::wire_effects(doc, &config);
    stats::wire_stats(doc, &controller);
    navigation::wire_project_details(doc, &controller);
    navigation::wire_shortcuts(doc, &controller);

    if test_bridge::test_mode_enabled() {
        test_bridge::attach_bridge(&controller);
    }
    log::info!("Press H for keyboard shortcuts");
    controller
}

/// Mount against the global window and document with the bundled config.
pub fn mount_page() -> Option<SharedController> {
    let win = dom::window()?;
    let doc = win.document()?;
    Some(mount(&win, &doc, SiteConfig::load_from_static()))
}
