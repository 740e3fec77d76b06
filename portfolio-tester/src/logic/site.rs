//! In-memory rendition of the portfolio page for browserless checks.
//!
//! Triggers and panels follow the configured shortcut pages plus a few
//! project detail pages. Fragment writes queue change notifications the way
//! `location.hash` does, and [`SimulatedSite::settle`] delivers them.
use std::collections::VecDeque;

use portfolio_core::{
    HelpContent, Navigation, PageId, PageIndex, PageSurface, Router, Shortcut, SiteConfig,
};
use thiserror::Error;

/// Project detail pages present in the simulated markup.
pub const PROJECT_IDS: [&str; 3] = ["1", "2", "3"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("{what}: expected {expected}, got {actual}")]
    Mismatch {
        what: &'static str,
        expected: String,
        actual: String,
    },
    #[error("{active_triggers} triggers and {active_panels} panels active at once")]
    MultipleActive {
        active_triggers: usize,
        active_panels: usize,
    },
}

impl CheckFailure {
    pub fn mismatch(what: &'static str, expected: impl ToString, actual: impl ToString) -> Self {
        Self::Mismatch {
            what,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Compare two values, reporting a [`CheckFailure::Mismatch`] under `what`.
pub fn expect_eq<T>(what: &'static str, expected: T, actual: T) -> Result<(), CheckFailure>
where
    T: PartialEq + std::fmt::Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(CheckFailure::mismatch(
            what,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

#[derive(Debug, Clone, Default)]
struct PageState {
    triggers: Vec<bool>,
    panels: Vec<bool>,
    breadcrumb: String,
    fragment: String,
    notifications: VecDeque<String>,
}

impl PageSurface for PageState {
    fn set_trigger_active(&mut self, slot: usize, active: bool) {
        if let Some(flag) = self.triggers.get_mut(slot) {
            *flag = active;
        }
    }

    fn set_panel_active(&mut self, slot: usize, active: bool) {
        if let Some(flag) = self.panels.get_mut(slot) {
            *flag = active;
        }
    }

    fn set_breadcrumb(&mut self, text: &str) {
        self.breadcrumb = text.to_string();
    }

    fn write_fragment(&mut self, page: &PageId) -> bool {
        let fragment = page.fragment();
        if self.fragment == fragment {
            return false;
        }
        self.fragment.clone_from(&fragment);
        self.notifications.push_back(fragment);
        true
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedSite {
    config: SiteConfig,
    router: Router,
    page: PageState,
    help_opened: usize,
}

impl SimulatedSite {
    /// Markup with the first shortcut page active and an empty fragment.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let mut keys: Vec<PageId> = config.direct_links().cloned().collect();
        keys.extend(PROJECT_IDS.iter().map(|id| PageId::project(id)));

        let index = PageIndex::new(keys.clone(), keys);
        let initial = index.trigger_key(0).cloned();
        let mut page = PageState {
            triggers: vec![false; index.trigger_count()],
            panels: vec![false; index.panel_count()],
            breadcrumb: config.paths.fallback.clone(),
            ..PageState::default()
        };
        if initial.is_some() {
            page.triggers[0] = true;
            page.panels[0] = true;
        }
        let router = Router::new(index, config.paths.clone()).with_initial_active(initial);

        Self {
            config,
            router,
            page,
            help_opened: 0,
        }
    }

    /// Fresh site that then runs the start-up fragment check.
    #[must_use]
    pub fn load(config: SiteConfig, fragment: &str) -> Self {
        let mut site = Self::new(config);
        site.page.fragment = fragment.to_string();
        site.router.load_from_fragment(&mut site.page, fragment);
        site.settle();
        site
    }

    pub fn click(&mut self, page: &str) -> Navigation {
        let outcome = self.router.switch_page(&mut self.page, &PageId::from(page));
        self.settle();
        outcome
    }

    pub fn open_project(&mut self, project_id: &str) -> Navigation {
        let outcome = self
            .router
            .switch_page(&mut self.page, &PageId::project(project_id));
        self.settle();
        outcome
    }

    /// Press a key the way the document-level handler would.
    pub fn press(&mut self, key: &str) -> Option<Navigation> {
        match Shortcut::from_key(key, self.config.shortcuts.len())? {
            Shortcut::SelectTrigger(slot) => {
                let page = self.config.shortcuts.get(slot)?.page.clone();
                let outcome = self.router.switch_page(&mut self.page, &page);
                self.settle();
                Some(outcome)
            }
            Shortcut::ShowHelp => {
                self.help_opened += 1;
                None
            }
        }
    }

    /// The user edits the fragment (or steps through history).
    pub fn edit_fragment(&mut self, fragment: &str) -> Vec<Navigation> {
        if self.page.fragment != fragment {
            self.page.fragment = fragment.to_string();
            self.page.notifications.push_back(fragment.to_string());
        }
        self.settle()
    }

    /// Deliver every queued fragment-change notification.
    pub fn settle(&mut self) -> Vec<Navigation> {
        let mut outcomes = Vec::new();
        while let Some(fragment) = self.page.notifications.pop_front() {
            outcomes.push(self.router.on_fragment_change(&mut self.page, &fragment));
        }
        outcomes
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.router.active().map(PageId::as_str)
    }

    #[must_use]
    pub fn breadcrumb(&self) -> &str {
        &self.page.breadcrumb
    }

    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.page.fragment
    }

    #[must_use]
    pub const fn help_opened(&self) -> usize {
        self.help_opened
    }

    #[must_use]
    pub fn help_content(&self) -> HelpContent {
        HelpContent::from_config(&self.config)
    }

    #[must_use]
    pub fn active_triggers(&self) -> usize {
        self.page.triggers.iter().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn active_panels(&self) -> usize {
        self.page.panels.iter().filter(|flag| **flag).count()
    }

    /// Fails when more than one trigger or panel carries the active flag.
    pub fn check_single_active(&self) -> Result<(), CheckFailure> {
        let active_triggers = self.active_triggers();
        let active_panels = self.active_panels();
        if active_triggers > 1 || active_panels > 1 {
            return Err(CheckFailure::MultipleActive {
                active_triggers,
                active_panels,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_site_shows_first_shortcut_page() {
        let site = SimulatedSite::new(SiteConfig::default());
        assert_eq!(site.active(), Some("home"));
        assert_eq!(site.active_triggers(), 1);
        assert_eq!(site.active_panels(), 1);
        assert_eq!(site.fragment(), "");
    }

    #[test]
    fn click_writes_fragment_and_swallows_echo() {
        let mut site = SimulatedSite::new(SiteConfig::default());
        let outcome = site.click("research");
        assert!(outcome.is_activated());
        assert_eq!(site.fragment(), "#research");
        assert_eq!(site.breadcrumb(), "~/research");
        assert!(site.settle().is_empty());
    }

    #[test]
    fn help_key_is_counted_without_navigation() {
        let mut site = SimulatedSite::new(SiteConfig::default());
        assert_eq!(site.press("h"), None);
        assert_eq!(site.help_opened(), 1);
        assert_eq!(site.active(), Some("home"));
    }

    #[test]
    fn expect_eq_reports_both_sides() {
        let err = expect_eq("breadcrumb", "~", "~/x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "breadcrumb: expected \"~\", got \"~/x\""
        );
    }
}
