//! Client side of `window.__portfolioTest`.
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use thirtyfour::prelude::*;

pub const BRIDGE_GLOBAL: &str = "__portfolioTest";

/// Snapshot returned by the page's `state()` hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    pub active: Option<String>,
    #[serde(default)]
    pub fragment: String,
    pub breadcrumb: Option<String>,
    #[serde(default)]
    pub stats_animated: bool,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute(format!("return !!window.{BRIDGE_GLOBAL}"), vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("{BRIDGE_GLOBAL} is not available. Did you pass ?test=1 in the base URL?");
        }
        Ok(())
    }

    /// Switch pages through the router. Returns whether the page activated.
    pub async fn navigate(&self, page: &str) -> Result<bool> {
        let result = self
            .driver
            .execute(
                format!("return window.{BRIDGE_GLOBAL}.navigate(arguments[0])"),
                vec![page.into()],
            )
            .await?;
        Ok(result.json().as_bool().unwrap_or(false))
    }

    /// Feed each character of `keys` through the shortcut handler.
    pub async fn key(&self, keys: &str) -> Result<()> {
        self.driver
            .execute(
                format!("window.{BRIDGE_GLOBAL}.key(arguments[0])"),
                vec![keys.into()],
            )
            .await?;
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let result = self
            .driver
            .execute(format!("return window.{BRIDGE_GLOBAL}.state()"), vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing bridge state")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn state_reads_camel_case_payload() {
        let state: BridgeState = serde_json::from_value(json!({
            "active": "projects",
            "fragment": "#projects",
            "breadcrumb": "~/projects",
            "statsAnimated": true
        }))
        .expect("parse state");
        assert_eq!(state.active.as_deref(), Some("projects"));
        assert!(state.stats_animated);
    }

    #[test]
    fn state_tolerates_missing_fields() {
        let state: BridgeState =
            serde_json::from_value(json!({ "active": null })).expect("parse state");
        assert_eq!(state, BridgeState::default());
    }
}
