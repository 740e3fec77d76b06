//! Site configuration: breadcrumbs, shortcut pages, and timer intervals
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aliases::PathAliases;
use crate::page::PageId;

const DEFAULT_SITE_DATA: &str = include_str!("../../portfolio-web/static/site.json");

/// Digits `1`..=`9` are the only shortcut keys.
pub const MAX_SHORTCUTS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub paths: PathAliases,
    #[serde(default = "SiteConfig::default_shortcuts")]
    pub shortcuts: Vec<ShortcutPage>,
    #[serde(default = "SiteConfig::default_clock_interval_ms")]
    pub clock_interval_ms: u32,
    #[serde(default)]
    pub stats: StatsCfg,
    #[serde(default = "SiteConfig::default_entrance_stagger_ms")]
    pub entrance_stagger_ms: u32,
    #[serde(default)]
    pub help: HelpCfg,
    #[serde(default = "SiteConfig::default_ping_ms")]
    pub ping_ms: u32,
}

/// A page reachable by digit shortcut; its position defines the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutPage {
    pub page: PageId,
    pub label: String,
}

impl ShortcutPage {
    #[must_use]
    pub fn new(page: &str, label: &str) -> Self {
        Self {
            page: PageId::from(page),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsCfg {
    #[serde(default = "StatsCfg::default_steps")]
    pub steps: usize,
    #[serde(default = "StatsCfg::default_tick_ms")]
    pub tick_ms: u32,
    #[serde(default = "StatsCfg::default_start_delay_ms")]
    pub start_delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCfg {
    /// Delay before a document click may dismiss the overlay.
    #[serde(default = "HelpCfg::default_arm_delay_ms")]
    pub arm_delay_ms: u32,
    #[serde(default = "HelpCfg::default_fade_ms")]
    pub fade_ms: u32,
}

/// Errors raised when site configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },
    #[error("at least one shortcut page is required")]
    NoShortcuts,
    #[error("at most {max} shortcut pages fit on the digit keys (got {count})")]
    TooManyShortcuts { count: usize, max: usize },
}

impl SiteConfig {
    fn default_shortcuts() -> Vec<ShortcutPage> {
        vec![
            ShortcutPage::new("home", "Home"),
            ShortcutPage::new("projects", "Projects"),
            ShortcutPage::new("competitions", "Competitions"),
            ShortcutPage::new("experience", "Experience"),
            ShortcutPage::new("research", "Research"),
        ]
    }

    const fn default_clock_interval_ms() -> u32 {
        1_000
    }

    const fn default_entrance_stagger_ms() -> u32 {
        100
    }

    const fn default_ping_ms() -> u32 {
        500
    }

    /// Parse a site configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Configuration bundled with the web crate's static assets.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SITE_DATA).unwrap_or_default()
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when a timer or step count is zero or the
    /// shortcut list does not fit the digit keys.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::Zero {
                field: "clock_interval_ms",
            });
        }
        if self.stats.steps == 0 {
            return Err(ConfigError::Zero {
                field: "stats.steps",
            });
        }
        if self.stats.tick_ms == 0 {
            return Err(ConfigError::Zero {
                field: "stats.tick_ms",
            });
        }
        if self.shortcuts.is_empty() {
            return Err(ConfigError::NoShortcuts);
        }
        if self.shortcuts.len() > MAX_SHORTCUTS {
            return Err(ConfigError::TooManyShortcuts {
                count: self.shortcuts.len(),
                max: MAX_SHORTCUTS,
            });
        }
        Ok(())
    }

    /// Page ids advertised as direct links (`#home`, `#projects`, ...).
    pub fn direct_links(&self) -> impl Iterator<Item = &PageId> {
        self.shortcuts.iter().map(|shortcut| &shortcut.page)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            paths: PathAliases::default(),
            shortcuts: Self::default_shortcuts(),
            clock_interval_ms: Self::default_clock_interval_ms(),
            stats: StatsCfg::default(),
            entrance_stagger_ms: Self::default_entrance_stagger_ms(),
            help: HelpCfg::default(),
            ping_ms: Self::default_ping_ms(),
        }
    }
}

impl StatsCfg {
    const fn default_steps() -> usize {
        50
    }

    const fn default_tick_ms() -> u32 {
        30
    }

    const fn default_start_delay_ms() -> u32 {
        500
    }
}

impl Default for StatsCfg {
    fn default() -> Self {
        Self {
            steps: Self::default_steps(),
            tick_ms: Self::default_tick_ms(),
            start_delay_ms: Self::default_start_delay_ms(),
        }
    }
}

impl HelpCfg {
    const fn default_arm_delay_ms() -> u32 {
        100
    }

    const fn default_fade_ms() -> u32 {
        300
    }
}

impl Default for HelpCfg {
    fn default() -> Self {
        Self {
            arm_delay_ms: Self::default_arm_delay_ms(),
            fade_ms: Self::default_fade_ms(),
        }
    }
}
