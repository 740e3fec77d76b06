//! Page identifiers and URL fragment handling
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by all project detail pages (`project-<n>`).
pub const PROJECT_PAGE_PREFIX: &str = "project-";

/// Opaque key naming one navigable view.
///
/// The same token appears as a navigation trigger's `data-page` attribute,
/// as a content panel's element id, and as the URL fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Resolve a page id from a raw `location.hash` value.
    ///
    /// A single leading `#` is stripped. An empty fragment names no page.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    /// Detail page for the project tagged `project_id` on its card.
    #[must_use]
    pub fn project(project_id: &str) -> Self {
        Self(format!("{PROJECT_PAGE_PREFIX}{project_id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fragment form written to the URL (`#<id>`).
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a shareable link to `page` from the current `href`.
///
/// Anything after the first `#` in `href` is replaced.
#[must_use]
pub fn page_link(href: &str, page: &PageId) -> String {
    let base = href.split('#').next().unwrap_or_default();
    format!("{base}#{page}")
}
