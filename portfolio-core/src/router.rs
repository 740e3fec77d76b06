//! Page router
//!
//! Keeps three things in step: which navigation trigger is highlighted, which
//! content panel is visible, and the URL fragment. Navigation comes in two
//! ways: a direct [`Router::switch_page`] (clicks, shortcuts, project detail
//! buttons) and the fragment path ([`Router::load_from_fragment`] at start-up,
//! [`Router::on_fragment_change`] afterwards).
//!
//! The router never touches the document itself; every mutation goes through
//! a [`PageSurface`].
use crate::aliases::PathAliases;
use crate::index::PageIndex;
use crate::page::PageId;

/// Mutable view of the elements the router controls.
pub trait PageSurface {
    /// Toggle the active designation on the trigger at `slot`.
    fn set_trigger_active(&mut self, slot: usize, active: bool);

    /// Toggle the active designation on the panel at `slot`.
    fn set_panel_active(&mut self, slot: usize, active: bool);

    /// Replace the breadcrumb text. Surfaces without a breadcrumb ignore it.
    fn set_breadcrumb(&mut self, text: &str);

    /// Point the URL fragment at `page`.
    ///
    /// Returns `true` when the fragment actually changed, meaning a
    /// fragment-change notification will follow.
    fn write_fragment(&mut self, page: &PageId) -> bool;
}

/// Why the fragment path did not navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The fragment was empty.
    EmptyFragment,
    /// No content panel carries this id.
    UnknownPanel(PageId),
    /// Notification caused by the router's own fragment write.
    Echo(PageId),
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Trigger and panel are active, breadcrumb and fragment updated.
    Activated { page: PageId, breadcrumb: String },
    /// Lookup failed after clearing; nothing is active now.
    Cleared { page: PageId },
    /// The fragment path declined to call the switch.
    Ignored { reason: IgnoreReason },
}

impl Navigation {
    #[must_use]
    pub const fn is_activated(&self) -> bool {
        matches!(self, Self::Activated { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    index: PageIndex,
    aliases: PathAliases,
    active: Option<PageId>,
    pending_echo: Option<PageId>,
}

impl Router {
    #[must_use]
    pub fn new(index: PageIndex, aliases: PathAliases) -> Self {
        Self {
            index,
            aliases,
            active: None,
            pending_echo: None,
        }
    }

    /// Record the page the initial markup already shows as active.
    #[must_use]
    pub fn with_initial_active(mut self, page: Option<PageId>) -> Self {
        self.active = page;
        self
    }

    #[must_use]
    pub const fn index(&self) -> &PageIndex {
        &self.index
    }

    #[must_use]
    pub const fn active(&self) -> Option<&PageId> {
        self.active.as_ref()
    }

    /// Fragment write still waiting for its change notification.
    #[must_use]
    pub const fn pending_echo(&self) -> Option<&PageId> {
        self.pending_echo.as_ref()
    }

    /// Show `page`.
    ///
    /// Every trigger and panel is cleared first. If `page` lacks either a
    /// trigger or a panel the call stops there, leaving nothing active.
    pub fn switch_page<S>(&mut self, surface: &mut S, page: &PageId) -> Navigation
    where
        S: PageSurface + ?Sized,
    {
        for slot in 0..self.index.trigger_count() {
            surface.set_trigger_active(slot, false);
        }
        for slot in 0..self.index.panel_count() {
            surface.set_panel_active(slot, false);
        }
        self.active = None;

        let Some((trigger, panel)) = self.index.slots(page).routable() else {
            return Navigation::Cleared { page: page.clone() };
        };

        surface.set_trigger_active(trigger, true);
        surface.set_panel_active(panel, true);
        let breadcrumb = self.aliases.breadcrumb(page).to_string();
        surface.set_breadcrumb(&breadcrumb);
        if surface.write_fragment(page) {
            self.pending_echo = Some(page.clone());
        }
        self.active = Some(page.clone());

        Navigation::Activated {
            page: page.clone(),
            breadcrumb,
        }
    }

    /// Start-up entry: navigate to the fragment's page if a panel has its id.
    pub fn load_from_fragment<S>(&mut self, surface: &mut S, fragment: &str) -> Navigation
    where
        S: PageSurface + ?Sized,
    {
        let Some(page) = PageId::from_fragment(fragment) else {
            return Navigation::Ignored {
                reason: IgnoreReason::EmptyFragment,
            };
        };
        if !self.index.has_panel(&page) {
            return Navigation::Ignored {
                reason: IgnoreReason::UnknownPanel(page),
            };
        }
        self.switch_page(surface, &page)
    }

    /// Fragment-change entry.
    ///
    /// The notification produced by the router's own write is consumed once
    /// and ignored; re-running the switch for it would change nothing.
    pub fn on_fragment_change<S>(&mut self, surface: &mut S, fragment: &str) -> Navigation
    where
        S: PageSurface + ?Sized,
    {
        let incoming = PageId::from_fragment(fragment);
        if let Some(pending) = self.pending_echo.take() {
            if incoming.as_ref() == Some(&pending) {
                return Navigation::Ignored {
                    reason: IgnoreReason::Echo(pending),
                };
            }
        }
        self.load_from_fragment(surface, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        triggers: Vec<bool>,
        panels: Vec<bool>,
        breadcrumb: String,
        fragment: String,
        writes: usize,
    }

    impl Recorder {
        fn sized(triggers: usize, panels: usize) -> Self {
            Self {
                triggers: vec![false; triggers],
                panels: vec![false; panels],
                ..Self::default()
            }
        }
    }

    impl PageSurface for Recorder {
        fn set_trigger_active(&mut self, slot: usize, active: bool) {
            self.triggers[slot] = active;
        }

        fn set_panel_active(&mut self, slot: usize, active: bool) {
            self.panels[slot] = active;
        }

        fn set_breadcrumb(&mut self, text: &str) {
            self.breadcrumb = text.to_string();
        }

        fn write_fragment(&mut self, page: &PageId) -> bool {
            self.writes += 1;
            let next = page.fragment();
            let changed = self.fragment != next;
            self.fragment = next;
            changed
        }
    }

    fn router() -> Router {
        Router::new(
            PageIndex::new(["home", "projects", "research"], ["home", "projects", "research"]),
            PathAliases::default(),
        )
    }

    #[test]
    fn switch_activates_pair_and_updates_breadcrumb() {
        let mut router = router();
        let mut surface = Recorder::sized(3, 3);
        let outcome = router.switch_page(&mut surface, &PageId::from("research"));
        assert_eq!(
            outcome,
            Navigation::Activated {
                page: PageId::from("research"),
                breadcrumb: String::from("~/research")
            }
        );
        assert_eq!(surface.triggers, vec![false, false, true]);
        assert_eq!(surface.panels, vec![false, false, true]);
        assert_eq!(surface.fragment, "#research");
        assert_eq!(router.active(), Some(&PageId::from("research")));
    }

    #[test]
    fn unknown_page_clears_previous_state() {
        let mut router = router();
        let mut surface = Recorder::sized(3, 3);
        router.switch_page(&mut surface, &PageId::from("home"));
        let outcome = router.switch_page(&mut surface, &PageId::from("nope"));
        assert!(matches!(outcome, Navigation::Cleared { .. }));
        assert!(surface.triggers.iter().all(|active| !active));
        assert!(surface.panels.iter().all(|active| !active));
        assert_eq!(surface.fragment, "#home");
        assert_eq!(router.active(), None);
    }

    #[test]
    fn own_fragment_write_is_ignored_once() {
        let mut router = router();
        let mut surface = Recorder::sized(3, 3);
        router.switch_page(&mut surface, &PageId::from("projects"));
        assert_eq!(router.pending_echo(), Some(&PageId::from("projects")));

        let echo = router.on_fragment_change(&mut surface, "#projects");
        assert_eq!(
            echo,
            Navigation::Ignored {
                reason: IgnoreReason::Echo(PageId::from("projects"))
            }
        );
        assert_eq!(surface.writes, 1);

        let again = router.on_fragment_change(&mut surface, "#projects");
        assert!(again.is_activated());
    }

    #[test]
    fn unchanged_fragment_leaves_no_pending_echo() {
        let mut router = router();
        let mut surface = Recorder::sized(3, 3);
        surface.fragment = String::from("#home");
        router.switch_page(&mut surface, &PageId::from("home"));
        assert_eq!(router.pending_echo(), None);
    }

    #[test]
    fn foreign_fragment_change_drops_pending_echo() {
        let mut router = router();
        let mut surface = Recorder::sized(3, 3);
        router.switch_page(&mut surface, &PageId::from("projects"));
        let outcome = router.on_fragment_change(&mut surface, "#home");
        assert!(outcome.is_activated());
        assert_eq!(router.active(), Some(&PageId::from("home")));
    }

    #[test]
    fn fragment_without_panel_is_ignored() {
        let mut router = router().with_initial_active(Some(PageId::from("home")));
        let mut surface = Recorder::sized(3, 3);
        surface.panels[0] = true;
        let outcome = router.load_from_fragment(&mut surface, "#nowhere");
        assert_eq!(
            outcome,
            Navigation::Ignored {
                reason: IgnoreReason::UnknownPanel(PageId::from("nowhere"))
            }
        );
        assert!(surface.panels[0]);
        assert_eq!(router.active(), Some(&PageId::from("home")));
        assert_eq!(
            router.load_from_fragment(&mut surface, ""),
            Navigation::Ignored {
                reason: IgnoreReason::EmptyFragment
            }
        );
    }
}
