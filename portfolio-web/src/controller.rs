//! Page-lifetime state shared by every event handler.
use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{HelpContent, Navigation, PageId, Router, SiteConfig, StatsGate};
use web_sys::{Document, HtmlElement};

use crate::dom;
use crate::surface::DomSurface;

pub const NAV_ITEM_SELECTOR: &str = ".nav-item";

pub type SharedController = Rc<RefCell<Controller>>;

pub struct Controller {
    router: Router,
    surface: DomSurface,
    nav_items: Vec<HtmlElement>,
    stats_gate: StatsGate,
    config: SiteConfig,
}

impl Controller {
    #[must_use]
    pub fn new(doc: &Document, config: SiteConfig) -> Self {
        let surface = DomSurface::collect(doc);
        let router = Router::new(surface.index(), config.paths.clone())
            .with_initial_active(surface.initially_active());
        Self {
            router,
            surface,
            nav_items: dom::query_all_html(doc, NAV_ITEM_SELECTOR),
            stats_gate: StatsGate::default(),
            config,
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedController {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn breadcrumb_text(&self) -> Option<String> {
        self.surface.breadcrumb_text()
    }

    #[must_use]
    pub fn help_content(&self) -> HelpContent {
        HelpContent::from_config(&self.config)
    }

    /// Direct navigation (clicks, shortcuts, detail buttons, test bridge).
    pub fn switch_page(&mut self, page: &PageId) -> Navigation {
        let outcome = self.router.switch_page(&mut self.surface, page);
        log_outcome(&outcome);
        outcome
    }

    /// Navigate from the fragment present at start-up.
    pub fn load_from_fragment(&mut self, fragment: &str) -> Navigation {
        let outcome = self.router.load_from_fragment(&mut self.surface, fragment);
        log_outcome(&outcome);
        outcome
    }

    /// React to a `hashchange` notification.
    pub fn on_fragment_change(&mut self, fragment: &str) -> Navigation {
        let outcome = self.router.on_fragment_change(&mut self.surface, fragment);
        log_outcome(&outcome);
        outcome
    }

    /// Navigation item at `slot` in document order.
    #[must_use]
    pub fn nav_item(&self, slot: usize) -> Option<HtmlElement> {
        self.nav_items.get(slot).cloned()
    }

    #[must_use]
    pub fn nav_items(&self) -> &[HtmlElement] {
        &self.nav_items
    }

    #[must_use]
    pub const fn stats_animated(&self) -> bool {
        self.stats_gate.has_fired()
    }

    /// Claim the one-shot stats animation.
    pub fn claim_stats_animation(&mut self) -> bool {
        self.stats_gate.try_fire()
    }
}

fn log_outcome(outcome: &Navigation) {
    match outcome {
        Navigation::Activated { page, breadcrumb } => {
            log::debug!("navigated to `{page}` ({breadcrumb})");
        }
        Navigation::Cleared { page } => log::debug!("page `{page}` not found; cleared"),
        Navigation::Ignored { reason } => log::debug!("fragment ignored: {reason:?}"),
    }
}
