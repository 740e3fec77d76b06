//! Router scenarios: activation, fragments, shortcuts, detail pages.
use anyhow::{Context, Result};
use portfolio_core::{IgnoreReason, Navigation, PageId, SiteConfig};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, ensure_field};
use crate::logic::site::{CheckFailure, SimulatedSite, expect_eq};
use crate::logic::TestScenario;

const SETTLE: Duration = Duration::from_secs(2);

fn first_page(cfg: &SiteConfig) -> Result<PageId, CheckFailure> {
    cfg.direct_links()
        .next()
        .cloned()
        .ok_or_else(|| CheckFailure::mismatch("shortcut pages", "at least one", "none"))
}

fn shortcut_page(cfg: &SiteConfig, position: usize) -> Option<&PageId> {
    cfg.shortcuts.get(position).map(|shortcut| &shortcut.page)
}

pub struct SmokeScenario;

fn smoke_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let site = SimulatedSite::new(cfg.clone());
    let home = first_page(cfg)?;
    expect_eq("active page", Some(home.as_str()), site.active())?;
    expect_eq("active triggers", 1, site.active_triggers())?;
    expect_eq("active panels", 1, site.active_panels())?;
    expect_eq("fragment", "", site.fragment())?;
    site.check_single_active()
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("smoke", smoke_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;

        let items = driver.find_all(By::Css(".nav-item")).await?;
        ensure_field("navigation items", ctx.config.shortcuts.len(), items.len())?;

        let active = driver.find_all(By::Css(".nav-item.active")).await?;
        ensure_field("active navigation items", 1, active.len())?;
        let panels = driver.find_all(By::Css(".page.active")).await?;
        ensure_field("active panels", 1, panels.len())?;

        let state = ctx.bridge.state().await?;
        anyhow::ensure!(state.active.is_some(), "no page active after load");
        if ctx.verbose {
            println!("  📊 Loaded state: {state:?}");
        }
        Ok(())
    }
}

pub struct HashLoadScenario;

fn hash_load_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let target = shortcut_page(cfg, 1).cloned().unwrap_or_else(|| PageId::from("projects"));
    let site = SimulatedSite::load(cfg.clone(), &target.fragment());
    expect_eq("active page", Some(target.as_str()), site.active())?;
    expect_eq("breadcrumb", cfg.paths.breadcrumb(&target), site.breadcrumb())?;
    site.check_single_active()?;

    let home = first_page(cfg)?;
    let unknown = SimulatedSite::load(cfg.clone(), "#no-such-page");
    expect_eq("active page after unknown fragment", Some(home.as_str()), unknown.active())?;
    expect_eq("active triggers after unknown fragment", 1, unknown.active_triggers())
}

impl CombinedScenario for HashLoadScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("hash-load", hash_load_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for HashLoadScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let target = shortcut_page(ctx.config, 1)
            .cloned()
            .unwrap_or_else(|| PageId::from("projects"));
        ctx.open(driver, Some(&target)).await?;

        let state = ctx.bridge.state().await?;
        ensure_field("active page", Some(target.to_string()), state.active)?;
        ensure_field(
            "breadcrumb",
            Some(ctx.config.paths.breadcrumb(&target).to_string()),
            state.breadcrumb,
        )?;

        let panel = driver
            .find(By::Id(target.as_str()))
            .await
            .with_context(|| format!("panel #{target} missing"))?;
        let class = panel.attr("class").await?.unwrap_or_default();
        anyhow::ensure!(
            class.split_whitespace().any(|c| c == "active"),
            "panel #{target} is not active (class `{class}`)"
        );
        Ok(())
    }
}

pub struct KeyboardShortcutsScenario;

fn keyboard_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let mut site = SimulatedSite::new(cfg.clone());
    for (position, shortcut) in cfg.shortcuts.iter().enumerate() {
        let key = (position + 1).to_string();
        let outcome = site.press(&key);
        expect_eq(
            "shortcut outcome",
            true,
            outcome.as_ref().is_some_and(Navigation::is_activated),
        )?;
        expect_eq("active page", Some(shortcut.page.as_str()), site.active())?;
        site.check_single_active()?;
    }

    // A key press and a click on the same trigger leave identical state.
    if let Some(third) = shortcut_page(cfg, 2) {
        let mut keyed = SimulatedSite::new(cfg.clone());
        keyed.press("3");
        let mut clicked = SimulatedSite::new(cfg.clone());
        clicked.click(third.as_str());
        expect_eq("active page", clicked.active(), keyed.active())?;
        expect_eq("breadcrumb", clicked.breadcrumb(), keyed.breadcrumb())?;
        expect_eq("fragment", clicked.fragment(), keyed.fragment())?;
    }

    let unbound = (cfg.shortcuts.len() + 1).to_string();
    for key in ["0", unbound.as_str(), "x", "Enter"] {
        expect_eq("unbound key outcome", None, site.press(key))?;
    }
    Ok(())
}

impl CombinedScenario for KeyboardShortcutsScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("keyboard-shortcuts", keyboard_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for KeyboardShortcutsScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;

        for (position, shortcut) in ctx.config.shortcuts.iter().enumerate().rev() {
            let key = (position + 1).to_string();
            ctx.bridge.key(&key).await?;
            let expected = shortcut.page.to_string();
            let state = ctx
                .wait_for_state(SETTLE, |s| s.active.as_deref() == Some(expected.as_str()))
                .await
                .with_context(|| format!("key {key}"))?;
            ensure_field("fragment", shortcut.page.fragment(), state.fragment)?;
            if ctx.verbose {
                println!("  ⌨️  Key {key} -> {expected}");
            }
        }
        Ok(())
    }
}

pub struct InvalidPageScenario;

fn invalid_page_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let mut site = SimulatedSite::new(cfg.clone());
    let target = shortcut_page(cfg, 1).cloned().unwrap_or_else(|| PageId::from("projects"));
    site.click(target.as_str());
    let before = site.fragment().to_string();

    let outcome = site.click("no-such-page");
    expect_eq(
        "outcome",
        Navigation::Cleared {
            page: PageId::from("no-such-page"),
        },
        outcome,
    )?;
    expect_eq("active triggers", 0, site.active_triggers())?;
    expect_eq("active panels", 0, site.active_panels())?;
    expect_eq("active page", None, site.active())?;
    expect_eq("fragment", before.as_str(), site.fragment())
}

impl CombinedScenario for InvalidPageScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("invalid-page", invalid_page_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for InvalidPageScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;
        let target = shortcut_page(ctx.config, 1)
            .cloned()
            .unwrap_or_else(|| PageId::from("projects"));
        anyhow::ensure!(
            ctx.bridge.navigate(target.as_str()).await?,
            "{target} did not activate"
        );

        let activated = ctx.bridge.navigate("no-such-page").await?;
        ensure_field("unknown page activated", false, activated)?;

        let state = ctx.bridge.state().await?;
        ensure_field("active page", None, state.active)?;
        ensure_field("fragment", target.fragment(), state.fragment)?;
        let active = driver.find_all(By::Css(".page.active")).await?;
        ensure_field("active panels", 0, active.len())?;
        Ok(())
    }
}

pub struct FragmentEchoScenario;

fn fragment_echo_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let (Some(first), Some(second)) = (shortcut_page(cfg, 3), shortcut_page(cfg, 4)) else {
        return Ok(());
    };
    let mut site = SimulatedSite::new(cfg.clone());
    site.click(first.as_str());
    expect_eq("pending notifications", 0, site.settle().len())?;

    let outcomes = site.edit_fragment(&second.fragment());
    expect_eq("notifications delivered", 1, outcomes.len())?;
    expect_eq("active page", Some(second.as_str()), site.active())?;

    // Stepping back re-runs the fragment path.
    site.edit_fragment(&first.fragment());
    expect_eq("active page after back", Some(first.as_str()), site.active())?;

    let ignored = site.edit_fragment("");
    expect_eq(
        "empty fragment outcome",
        vec![Navigation::Ignored {
            reason: IgnoreReason::EmptyFragment,
        }],
        ignored,
    )?;
    expect_eq("active page after empty fragment", Some(first.as_str()), site.active())?;
    site.check_single_active()
}

impl CombinedScenario for FragmentEchoScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("fragment-echo", fragment_echo_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for FragmentEchoScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let (Some(first), Some(second)) = (shortcut_page(ctx.config, 3), shortcut_page(ctx.config, 4))
        else {
            anyhow::bail!("fragment-echo needs at least five shortcut pages");
        };
        ctx.open(driver, None).await?;

        ctx.bridge.navigate(first.as_str()).await?;
        ctx.bridge.navigate(second.as_str()).await?;
        let state = ctx
            .wait_for_state(SETTLE, |s| s.fragment == second.fragment())
            .await?;
        ensure_field("active page", Some(second.to_string()), state.active)?;

        driver.back().await?;
        let expected = first.to_string();
        ctx.wait_for_state(SETTLE, |s| s.active.as_deref() == Some(expected.as_str()))
            .await
            .context("history back")?;
        Ok(())
    }
}

pub struct ProjectDetailScenario;

fn project_detail_check(cfg: &SiteConfig) -> Result<(), CheckFailure> {
    let mut site = SimulatedSite::new(cfg.clone());
    let page = PageId::project("2");
    let outcome = site.open_project("2");
    expect_eq("outcome activated", true, outcome.is_activated())?;
    expect_eq("active page", Some(page.as_str()), site.active())?;
    expect_eq("breadcrumb", cfg.paths.breadcrumb(&page), site.breadcrumb())?;
    expect_eq("fragment", page.fragment().as_str(), site.fragment())?;
    site.check_single_active()
}

impl CombinedScenario for ProjectDetailScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("project-detail", project_detail_check))
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ProjectDetailScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver, None).await?;
        let listing = shortcut_page(ctx.config, 1)
            .cloned()
            .unwrap_or_else(|| PageId::from("projects"));
        ctx.bridge.navigate(listing.as_str()).await?;

        let card = driver
            .find(By::Css(".project-card[data-project]"))
            .await
            .context("no project card with data-project")?;
        let project_id = card.attr("data-project").await?.unwrap_or_default();
        let button = card
            .find(By::Css(".view-details-btn"))
            .await
            .context("first project card has no detail button")?;
        button.click().await?;

        let expected = PageId::project(&project_id).to_string();
        let state = ctx
            .wait_for_state(SETTLE, |s| s.active.as_deref() == Some(expected.as_str()))
            .await?;
        ensure_field("fragment", format!("#{expected}"), state.fragment)?;
        Ok(())
    }
}
