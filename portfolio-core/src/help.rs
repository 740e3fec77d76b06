//! Content of the keyboard help overlay
use std::fmt::Write as _;

use crate::config::SiteConfig;

/// One row of the shortcut table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContent {
    pub title: String,
    pub shortcuts: Vec<HelpEntry>,
    pub help_entry: HelpEntry,
    pub direct_links: String,
    pub dismiss_hint: String,
}

impl HelpContent {
    #[must_use]
    pub fn from_config(cfg: &SiteConfig) -> Self {
        let shortcuts = cfg
            .shortcuts
            .iter()
            .enumerate()
            .map(|(idx, shortcut)| HelpEntry {
                key: (idx + 1).to_string(),
                label: shortcut.label.clone(),
            })
            .collect();
        let links: Vec<String> = cfg.direct_links().map(|page| page.fragment()).collect();
        Self {
            title: String::from("NAVIGATION SHORTCUTS"),
            shortcuts,
            help_entry: HelpEntry {
                key: String::from("H"),
                label: String::from("Help"),
            },
            direct_links: format!("Add {} to URL", join_with_or(&links)),
            dismiss_hint: String::from("Click anywhere to close"),
        }
    }

    /// Plain-text listing written to the log when the overlay opens.
    #[must_use]
    pub fn listing(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for entry in self.shortcuts.iter().chain(std::iter::once(&self.help_entry)) {
            let _ = writeln!(out, "  {} - {}", entry.key, entry.label);
        }
        let _ = write!(out, "{}", self.direct_links);
        out
    }
}

fn join_with_or(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [head @ .., last] => format!("{}, or {last}", head.join(", ")),
    }
}
