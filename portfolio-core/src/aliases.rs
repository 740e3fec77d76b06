//! Breadcrumb aliases shown in the terminal-style footer
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::page::PageId;

pub const DEFAULT_ALIAS: &str = "~";

/// Fixed lookup from page id to the breadcrumb shown while it is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAliases {
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default = "default_alias")]
    pub fallback: String,
}

fn default_alias() -> String {
    DEFAULT_ALIAS.to_string()
}

impl Default for PathAliases {
    fn default() -> Self {
        let aliases = [
            ("home", "~"),
            ("projects", "~/projects"),
            ("competitions", "~/competitions"),
            ("experience", "~/experience"),
            ("research", "~/research"),
        ]
        .into_iter()
        .map(|(page, alias)| (page.to_string(), alias.to_string()))
        .collect();
        Self {
            aliases,
            fallback: default_alias(),
        }
    }
}

impl PathAliases {
    /// Breadcrumb for `page`, or the fallback token when it is unmapped.
    #[must_use]
    pub fn breadcrumb(&self, page: &PageId) -> &str {
        self.aliases
            .get(page.as_str())
            .map_or(self.fallback.as_str(), String::as_str)
    }
}
