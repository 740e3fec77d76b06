//! Portfolio core
//!
//! Platform-agnostic navigation and display logic for the portfolio site.
//! This crate holds the router state machine and the small pieces of page
//! behavior that can be reasoned about without a browser; the web crate binds
//! them to the document.

pub mod aliases;
pub mod clock;
pub mod config;
pub mod help;
pub mod index;
pub mod keyboard;
pub mod numbers;
pub mod page;
pub mod router;
pub mod stats;

// Re-export commonly used types
pub use aliases::PathAliases;
pub use clock::ClockReading;
pub use config::{ConfigError, HelpCfg, ShortcutPage, SiteConfig, StatsCfg};
pub use help::{HelpContent, HelpEntry};
pub use index::{PageIndex, PageSlots};
pub use keyboard::Shortcut;
pub use page::{PageId, page_link};
pub use router::{IgnoreReason, Navigation, PageSurface, Router};
pub use stats::{StatCounter, StatParseError, StatTick, StatsGate};
