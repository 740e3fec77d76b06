//! Command-line surface of the tester.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::browser::{BrowserConfig, BrowserKind};
use crate::common::scenario::scenario_names;
use crate::logic::reports::ReportFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Router logic against an in-memory page (fast, no browser)
    Logic,
    /// Browser automation against a served build (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

#[derive(Debug, Parser)]
#[command(name = "portfolio-tester", version)]
#[command(about = "Automated QA for the portfolio site - router logic and browser automation")]
pub struct Args {
    /// Test mode: logic (fast), browser (real page), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    pub mode: TestMode,

    /// Scenarios to run (comma-separated, `all` for every scenario)
    #[arg(long, default_value = "all")]
    pub scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    pub list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    pub report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    pub browsers: String,

    /// Base URL of the site (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    pub base_url: String,

    /// Where failed browser scenarios leave screenshots and state
    #[arg(long, default_value = "target/test-artifacts")]
    pub artifacts_dir: PathBuf,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    pub hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    pub headless: HeadlessMode,
}

impl Args {
    #[must_use]
    pub const fn runs_logic(&self) -> bool {
        matches!(self.mode, TestMode::Logic | TestMode::Both)
    }

    #[must_use]
    pub const fn runs_browser(&self) -> bool {
        matches!(self.mode, TestMode::Browser | TestMode::Both)
    }

    /// Requested scenario names, with `all` standing for the whole catalog.
    #[must_use]
    pub fn scenario_list(&self) -> Vec<String> {
        let mut requested: Vec<String> = Vec::new();
        for name in csv(&self.scenarios) {
            let expanded = if name == "all" {
                scenario_names()
            } else {
                vec![name.to_string()]
            };
            for entry in expanded {
                if !requested.contains(&entry) {
                    requested.push(entry);
                }
            }
        }
        requested
    }

    /// Recognized browsers, plus the names that matched none.
    #[must_use]
    pub fn browser_kinds(&self) -> (Vec<BrowserKind>, Vec<String>) {
        let mut kinds = Vec::new();
        let mut unknown = Vec::new();
        for name in csv(&self.browsers) {
            match BrowserKind::parse(name) {
                Some(kind) if !kinds.contains(&kind) => kinds.push(kind),
                Some(_) => {}
                None => unknown.push(name.to_string()),
            }
        }
        (kinds, unknown)
    }

    #[must_use]
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            headless: matches!(self.headless, HeadlessMode::Headless),
            remote_hub: self.hub.clone(),
            ..BrowserConfig::default()
        }
    }
}

fn csv(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}
