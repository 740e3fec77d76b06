use colored::Colorize;
use portfolio_core::SiteConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::site::CheckFailure;

/// Browserless check run against a fresh configuration.
pub type LogicCheck = fn(&SiteConfig) -> Result<(), CheckFailure>;

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic` or the browser label the scenario ran in.
    pub runner: String,
    pub passed: bool,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    #[must_use]
    pub fn from_outcome(
        scenario_name: &str,
        runner: &str,
        outcome: Result<(), String>,
        duration: Duration,
    ) -> Self {
        let failures = outcome.err().into_iter().collect::<Vec<_>>();
        Self {
            scenario_name: scenario_name.to_string(),
            runner: runner.to_string(),
            passed: failures.is_empty(),
            failures,
            duration,
        }
    }
}

pub struct LogicTester {
    config: SiteConfig,
    verbose: bool,
}

impl LogicTester {
    #[must_use]
    pub const fn new(config: SiteConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }
        let start = Instant::now();
        let outcome = (scenario.check)(&self.config).map_err(|failure| failure.to_string());
        let duration = start.elapsed();

        match &outcome {
            Ok(()) => println!("✅ [logic] {} - {duration:?}", scenario.name),
            Err(failure) => eprintln!("❌ [logic] {} - {duration:?}: {failure}", scenario.name),
        }
        ScenarioResult::from_outcome(&scenario.name, "logic", outcome, duration)
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64() * 1_000.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(millis.max(0.0) / 1_000.0))
    }
}
