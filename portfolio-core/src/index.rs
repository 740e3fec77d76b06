//! One-time lookup from page id to its navigation trigger and content panel.
use std::collections::HashMap;

use crate::page::PageId;

/// Position of a page's elements in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSlots {
    pub trigger: Option<usize>,
    pub panel: Option<usize>,
}

impl PageSlots {
    /// Both halves are present, so the router can activate this page.
    #[must_use]
    pub const fn routable(self) -> Option<(usize, usize)> {
        match (self.trigger, self.panel) {
            (Some(trigger), Some(panel)) => Some((trigger, panel)),
            _ => None,
        }
    }
}

/// Indexed view of the page's navigation triggers and content panels.
///
/// Built once from the keys found in the document. When a key occurs more
/// than once, the first element in document order wins, which matches what a
/// selector lookup against the live document would return.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    triggers: Vec<PageId>,
    panels: Vec<PageId>,
    slots: HashMap<PageId, PageSlots>,
}

impl PageIndex {
    /// Build the index from trigger keys and panel ids, both in document order.
    pub fn new<T, P>(triggers: T, panels: P) -> Self
    where
        T: IntoIterator,
        T::Item: Into<PageId>,
        P: IntoIterator,
        P::Item: Into<PageId>,
    {
        let triggers: Vec<PageId> = triggers.into_iter().map(Into::into).collect();
        let panels: Vec<PageId> = panels.into_iter().map(Into::into).collect();
        let mut slots: HashMap<PageId, PageSlots> = HashMap::new();
        for (idx, id) in triggers.iter().enumerate() {
            slots
                .entry(id.clone())
                .or_default()
                .trigger
                .get_or_insert(idx);
        }
        for (idx, id) in panels.iter().enumerate() {
            slots.entry(id.clone()).or_default().panel.get_or_insert(idx);
        }
        Self {
            triggers,
            panels,
            slots,
        }
    }

    #[must_use]
    pub fn slots(&self, page: &PageId) -> PageSlots {
        self.slots.get(page).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn has_panel(&self, page: &PageId) -> bool {
        self.slots(page).panel.is_some()
    }

    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Key carried by the trigger at `slot`.
    #[must_use]
    pub fn trigger_key(&self, slot: usize) -> Option<&PageId> {
        self.triggers.get(slot)
    }
}
