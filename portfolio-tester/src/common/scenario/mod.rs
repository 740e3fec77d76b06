use anyhow::{Result, bail};
use portfolio_core::{PageId, SiteConfig, page_link};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use crate::browser::{BridgeState, TestBridge};
use crate::logic::TestScenario;

pub mod catalog;
pub mod display;
pub mod navigation;

pub use catalog::{get_scenario, list_scenarios, scenario_names};

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub config: &'a SiteConfig,
    pub bridge: TestBridge<'a>,
    /// Directory that receives evidence if this run fails.
    pub artifacts: PathBuf,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Load the site, optionally at a page's fragment, and wait for the bridge.
    ///
    /// The reload forces a real start-up even when only the fragment differs
    /// from the URL already open.
    pub async fn open(&self, driver: &WebDriver, page: Option<&PageId>) -> Result<()> {
        let url = page.map_or_else(|| self.base_url.clone(), |p| page_link(&self.base_url, p));
        driver.goto(&url).await?;
        driver.refresh().await?;
        self.bridge.ensure_available().await?;
        if self.verbose {
            println!("  🌐 Loaded {url}, bridge connected");
        }
        Ok(())
    }

    /// Poll the bridge until `accept` holds or `timeout` passes.
    pub async fn wait_for_state<F>(&self, timeout: Duration, accept: F) -> Result<BridgeState>
    where
        F: Fn(&BridgeState) -> bool + Send,
    {
        let start = Instant::now();
        loop {
            let state = self.bridge.state().await?;
            if accept(&state) {
                return Ok(state);
            }
            if start.elapsed() >= timeout {
                bail!("state did not settle within {timeout:?}: {state:?}");
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }
}

#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

/// Scenario with both a browserless check and a browser run.
pub trait CombinedScenario: BrowserScenario + Send + Sync {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Fail with both values when they differ.
pub fn ensure_field<T>(what: &str, expected: T, actual: T) -> Result<()>
where
    T: PartialEq + std::fmt::Debug,
{
    anyhow::ensure!(
        expected == actual,
        "{what}: expected {expected:?}, got {actual:?}"
    );
    Ok(())
}
