//! What a failed browser scenario leaves behind for inspection.
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;

use crate::browser::{BridgeState, BrowserKind, TestBridge};

/// `<base>/<browser>/<scenario>/<UTC timestamp>`, one directory per run.
#[must_use]
pub fn artifact_path(base: &Path, browser: BrowserKind, scenario: &str) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S").to_string();
    base.join(browser.label()).join(scenario).join(stamp)
}

/// Page evidence gathered after a browser scenario fails.
///
/// Every part is best effort: a page that never loaded still yields the
/// error report.
#[derive(Debug, Default)]
pub struct FailureArtifacts {
    pub url: Option<String>,
    pub screenshot: Option<Vec<u8>>,
    pub page_source: Option<String>,
    pub state: Option<BridgeState>,
    pub error_chain: String,
}

impl FailureArtifacts {
    pub async fn collect(driver: &WebDriver, bridge: &TestBridge<'_>, err: &anyhow::Error) -> Self {
        Self {
            url: driver.current_url().await.ok().map(|url| url.to_string()),
            screenshot: driver.screenshot_as_png().await.ok(),
            page_source: driver.source().await.ok(),
            state: bridge.state().await.ok(),
            error_chain: format!("{err:#}"),
        }
    }

    /// Human-readable summary: where the page was and what the router held.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = vec![format!("error: {}", self.error_chain)];
        if let Some(url) = &self.url {
            lines.push(format!("url: {url}"));
        }
        match &self.state {
            Some(state) => {
                lines.push(format!(
                    "active page: {}",
                    state.active.as_deref().unwrap_or("(none)")
                ));
                lines.push(format!("fragment: {}", state.fragment));
                if let Some(crumb) = &state.breadcrumb {
                    lines.push(format!("breadcrumb: {crumb}"));
                }
                lines.push(format!("stats animated: {}", state.stats_animated));
            }
            None => lines.push(String::from("bridge state: unavailable")),
        }
        lines.join("\n")
    }

    /// Write whatever was captured into `dir`, returning the files written.
    pub fn write(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        let mut files: Vec<(&str, Vec<u8>)> = vec![("report.txt", self.report().into_bytes())];
        if let Some(png) = &self.screenshot {
            files.push(("screenshot.png", png.clone()));
        }
        if let Some(source) = &self.page_source {
            files.push(("dom.html", source.clone().into_bytes()));
        }
        if let Some(state) = &self.state {
            files.push(("state.json", serde_json::to_vec_pretty(state)?));
        }

        let mut written = Vec::new();
        for (name, payload) in files {
            let path = dir.join(name);
            match fs::write(&path, payload) {
                Ok(()) => written.push(path),
                Err(err) => log::warn!("could not write {}: {err}", path.display()),
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!(
            "portfolio-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn path_nests_browser_then_scenario() {
        let path = artifact_path(Path::new("target/out"), BrowserKind::Firefox, "hash-load");
        assert!(path.starts_with("target/out/firefox/hash-load"));
        assert_eq!(path.components().count(), 5);
    }

    #[test]
    fn report_describes_router_state() {
        let artifacts = FailureArtifacts {
            url: Some(String::from("http://localhost:8080/?test=1#projects")),
            state: Some(BridgeState {
                active: None,
                fragment: String::from("#projects"),
                breadcrumb: Some(String::from("~/projects")),
                stats_animated: false,
            }),
            error_chain: String::from("active page: expected \"projects\", got None"),
            ..FailureArtifacts::default()
        };
        let report = artifacts.report();
        assert!(report.contains("active page: (none)"));
        assert!(report.contains("fragment: #projects"));
        assert!(report.contains("url: http://localhost:8080/?test=1#projects"));
    }

    #[test]
    fn write_skips_parts_that_were_not_captured() {
        let dir = scratch_dir();
        let artifacts = FailureArtifacts {
            screenshot: Some(vec![1, 2, 3]),
            error_chain: String::from("boom"),
            ..FailureArtifacts::default()
        };
        let written = artifacts.write(&dir).expect("write artifacts");
        assert_eq!(written.len(), 2);
        assert!(dir.join("screenshot.png").exists());
        assert!(!dir.join("state.json").exists());
        let report = std::fs::read_to_string(dir.join("report.txt")).expect("read report");
        assert!(report.contains("bridge state: unavailable"));
    }
}
