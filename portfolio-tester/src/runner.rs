//! Drives the selected scenarios through the logic and browser runners.
use colored::Colorize;
use portfolio_core::SiteConfig;
use std::time::Instant;
use thirtyfour::WebDriver;

use crate::browser::{BrowserKind, TestBridge, new_session};
use crate::cli::Args;
use crate::common::scenario::{CombinedScenario, ScenarioCtx, get_scenario};
use crate::common::{FailureArtifacts, artifact_path};
use crate::logic::{LogicTester, ScenarioResult};

pub struct Runner<'a> {
    args: &'a Args,
    config: SiteConfig,
    scenarios: Vec<(String, Box<dyn CombinedScenario>)>,
}

impl<'a> Runner<'a> {
    /// Resolve the requested scenario names; unknown names are reported and skipped.
    #[must_use]
    pub fn new(args: &'a Args, config: SiteConfig) -> Self {
        let scenarios = args
            .scenario_list()
            .into_iter()
            .filter_map(|name| match get_scenario(&name) {
                Some(scenario) => Some((name, scenario)),
                None => {
                    eprintln!("⚠️  Unknown scenario: {}", name.yellow());
                    None
                }
            })
            .collect();
        Self {
            args,
            config,
            scenarios,
        }
    }

    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub async fn run(&self) -> Vec<ScenarioResult> {
        let mut results = Vec::new();
        if self.args.runs_logic() {
            results.extend(self.run_logic());
        }
        if self.args.runs_browser() {
            results.extend(self.run_browsers().await);
        }
        results
    }

    #[must_use]
    pub fn run_logic(&self) -> Vec<ScenarioResult> {
        println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
        let tester = LogicTester::new(self.config.clone(), self.args.verbose);
        self.scenarios
            .iter()
            .filter_map(|(name, scenario)| {
                let logic = scenario.as_logic_scenario();
                if logic.is_none() {
                    eprintln!("⚠️  {} has no logic check", name.yellow());
                }
                logic
            })
            .map(|logic| tester.run_scenario(&logic))
            .collect()
    }

    pub async fn run_browsers(&self) -> Vec<ScenarioResult> {
        println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
        let (kinds, unknown) = self.args.browser_kinds();
        for name in unknown {
            eprintln!("⚠️  Unknown browser: {}", name.yellow());
        }

        let session_cfg = self.args.browser_config();
        let mut results = Vec::new();
        for kind in kinds {
            let driver = match new_session(kind, &session_cfg).await {
                Ok(driver) => driver,
                Err(err) => {
                    eprintln!("❌ Could not start {}: {err}", kind.label());
                    continue;
                }
            };
            for (name, scenario) in &self.scenarios {
                results.push(self.run_in_browser(kind, &driver, name, scenario.as_ref()).await);
            }
            if let Err(err) = driver.quit().await {
                log::warn!("closing {} session failed: {err}", kind.label());
            }
        }
        results
    }

    async fn run_in_browser(
        &self,
        kind: BrowserKind,
        driver: &WebDriver,
        name: &str,
        scenario: &dyn CombinedScenario,
    ) -> ScenarioResult {
        let ctx = ScenarioCtx {
            base_url: self.args.base_url.clone(),
            config: &self.config,
            bridge: TestBridge::new(driver),
            artifacts: artifact_path(&self.args.artifacts_dir, kind, name),
            verbose: self.args.verbose,
        };

        let started = Instant::now();
        let outcome = scenario.run_browser(driver, &ctx).await;
        let duration = started.elapsed();

        if let Err(err) = &outcome {
            eprintln!("❌ [{}] {name} - {duration:?}: {err:#}", kind.label().red());
            let evidence = FailureArtifacts::collect(driver, &ctx.bridge, err).await;
            match evidence.write(&ctx.artifacts) {
                Ok(files) => log::info!(
                    "{} artifacts in {}",
                    files.len(),
                    ctx.artifacts.display()
                ),
                Err(write_err) => log::warn!("artifacts not saved: {write_err:#}"),
            }
        } else {
            println!("✅ [{}] {name} - {duration:?}", kind.label().green());
        }

        ScenarioResult::from_outcome(
            name,
            kind.label(),
            outcome.map_err(|err| format!("{err:#}")),
            duration,
        )
    }
}
