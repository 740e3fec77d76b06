//! Stats counter and help overlay scenarios.
use anyhow::{Context, Result};
use portfolio_core::{SiteConfig, StatCounter, StatParseError, StatTick, StatsGate};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, ensure_field};
use crate::logic::site::{CheckFailure, SimulatedSite, expect_eq};
use crate::logic::TestScenario;

const OVERLAY_SELECTOR: &str = ".help-notification";

pub struct StatsCounterScenario;

/// Run a counter to completion, returning the intermediate texts.
fn run_counter(text: &str, steps: usize) -> Result<(Vec<String>, String), StatParseError> {
    let mut counter = StatCounter::new(text, steps)?;
    let mut shown = Vec::new();
    // One spare tick absorbs floating-point drift on the last increment.
    for _ in 0..=steps {
        match counter.tick() {
            StatTick::Counting(value) => shown.push(value),
            StatTick::Finished(value) => return Ok((shown, value)),
        }
    }
    Ok((shown, counter.original().to_string()))
}

fn stats_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let steps = cfg.stats.steps;
    for text in ["150+", "12", "3.5K"] {
        let (shown, last) = run_counter(text, steps)
            .map_err(|err| CheckFailure::mismatch("stat parse", "a number", err))?;
        expect_eq("final text", text, last.as_str())?;
        let target = portfolio_core::stats::parse_stat_value(text)
            .map_err(|err| CheckFailure::mismatch("stat parse", "a number", err))?;
        let overshoot = shown
            .iter()
            .filter_map(|value| value.parse::<f64>().ok())
            .any(|value| value >= target);
        expect_eq("intermediate value reached target", false, overshoot)?;
    }

    expect_eq(
        "non-numeric stat",
        Err(StatParseError::NoDigits(String::from("∞"))),
        StatCounter::new("∞", steps).map(|_| ()),
    )?;

    let mut gate = StatsGate::default();
    expect_eq("first claim", true, gate.try_fire())?;
    expect_eq("second claim", false, gate.try_fire())
}

impl CombinedScenario for StatsCounterScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("stats-counter", stats_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for StatsCounterScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;
        let stats = ctx.config.stats;
        let run_ms = u64::from(stats.start_delay_ms)
            + u64::from(stats.tick_ms) * u64::try_from(stats.steps).unwrap_or(u64::MAX / 2);
        let budget = Duration::from_millis(run_ms.saturating_add(2_000));

        ctx.wait_for_state(budget, |s| s.stats_animated)
            .await
            .context("stats animation never started")?;
        tokio::time::sleep(Duration::from_millis(run_ms)).await;

        for element in driver.find_all(By::Css(".stat-value")).await? {
            let text = element.text().await?;
            if ctx.verbose {
                println!("  🔢 stat settled at `{text}`");
            }
            anyhow::ensure!(!text.trim().is_empty(), "stat value left empty");
        }

        // Leaving and returning to home must not start a second run.
        ctx.bridge.key("2").await?;
        ctx.bridge.key("1").await?;
        tokio::time::sleep(Duration::from_millis(u64::from(stats.start_delay_ms) + 200)).await;
        let state = ctx.bridge.state().await?;
        ensure_field("stats animated", true, state.stats_animated)?;
        Ok(())
    }
}

pub struct HelpOverlayScenario;

fn help_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let mut site = SimulatedSite::new(cfg.clone());
    expect_eq("help key outcome", None, site.press("H"))?;
    expect_eq("help key outcome", None, site.press("h"))?;
    expect_eq("overlays opened", 2, site.help_opened())?;
    expect_eq(
        "active page",
        cfg.direct_links().next().map(|p| p.as_str()),
        site.active(),
    )?;

    let listing = site.help_content().listing();
    for (position, shortcut) in cfg.shortcuts.iter().enumerate() {
        let row = format!("{} - {}", position + 1, shortcut.label);
        expect_eq("listing row present", true, listing.contains(&row))?;
    }
    expect_eq("help row present", true, listing.contains("H - Help"))
}

impl CombinedScenario for HelpOverlayScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("help-overlay", help_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for HelpOverlayScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;
        let help = ctx.config.help;

        ctx.bridge.key("h").await?;
        let overlay = driver
            .find(By::Css(OVERLAY_SELECTOR))
            .await
            .context("overlay did not appear")?;
        let text = overlay.text().await?;
        for shortcut in &ctx.config.shortcuts {
            anyhow::ensure!(
                text.contains(&shortcut.label),
                "overlay is missing `{}`",
                shortcut.label
            );
        }

        tokio::time::sleep(Duration::from_millis(u64::from(help.arm_delay_ms) + 150)).await;
        driver.execute("document.body.click()", vec![]).await?;
        tokio::time::sleep(Duration::from_millis(u64::from(help.fade_ms) + 300)).await;

        let remaining = driver.find_all(By::Css(OVERLAY_SELECTOR)).await?;
        ensure_field("overlays after dismiss", 0, remaining.len())?;
        Ok(())
    }
}
