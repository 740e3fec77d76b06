use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for a terminal
    Console,
    /// Machine-readable array of scenario results
    Json,
    /// Summary table for CI job pages
    Markdown,
}

/// Render `results` in `format`; `elapsed` covers the whole run.
pub fn write_report(
    format: ReportFormat,
    out: &mut dyn Write,
    results: &[ScenarioResult],
    elapsed: Duration,
) -> Result<()> {
    match format {
        ReportFormat::Json => generate_json_report(out, results),
        ReportFormat::Markdown if results.is_empty() => {
            writeln!(out, "# Portfolio Test Results\n\n_No scenarios executed._")?;
            Ok(())
        }
        ReportFormat::Markdown => generate_markdown_report(out, results),
        ReportFormat::Console if results.is_empty() => {
            writeln!(out, "No scenarios executed.")?;
            writeln!(out, "🏁 Total time: {elapsed:?}")?;
            Ok(())
        }
        ReportFormat::Console => {
            generate_console_report(out, results, elapsed)?;
            writeln!(out)?;
            writeln!(out, "🏁 Total time: {elapsed:?}")?;
            Ok(())
        }
    }
}

fn success_rate(results: &[ScenarioResult]) -> f64 {
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len().max(1) as f64) * 100.0;
    rate
}

pub fn generate_console_report(
    out: &mut dyn Write,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "Total scenarios: {total}")?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{status} {} [{}]",
            result.scenario_name.bold(),
            result.runner
        )?;
        writeln!(out, "   Time: {:?}", result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }

    if let (Some(fastest), Some(slowest)) = (
        results.iter().min_by_key(|r| r.duration),
        results.iter().max_by_key(|r| r.duration),
    ) {
        writeln!(out, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(out, "{}", "=====================".yellow())?;
        writeln!(
            out,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.duration
        )?;
        writeln!(
            out,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.duration
        )?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, results: &[ScenarioResult]) -> Result<()> {
    writeln!(out, "# Portfolio Test Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Total scenarios**: {total}")?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", total - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    writeln!(out, "| Scenario | Runner | Status | Time |")?;
    writeln!(out, "|----------|--------|--------|------|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {} | {} | {status} | {:?} |",
            result.scenario_name, result.runner, result.duration
        )?;
    }

    let failed: Vec<&ScenarioResult> = results.iter().filter(|r| !r.passed).collect();
    if !failed.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for result in failed {
            writeln!(out, "### {} ({})\n", result.scenario_name, result.runner)?;
            for failure in &result.failures {
                writeln!(out, "- {failure}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_results() -> Vec<ScenarioResult> {
        vec![
            ScenarioResult::from_outcome("smoke", "logic", Ok(()), Duration::from_millis(2)),
            ScenarioResult::from_outcome(
                "hash-load",
                "chrome",
                Err(String::from("active page: expected projects, got home")),
                Duration::from_millis(40),
            ),
        ]
    }

    #[test]
    fn empty_runs_still_produce_valid_output() {
        let mut json = Vec::new();
        write_report(ReportFormat::Json, &mut json, &[], Duration::ZERO).expect("json");
        assert_eq!(String::from_utf8(json).expect("utf8").trim(), "[]");

        let mut markdown = Vec::new();
        write_report(ReportFormat::Markdown, &mut markdown, &[], Duration::ZERO)
            .expect("markdown");
        assert!(String::from_utf8(markdown)
            .expect("utf8")
            .contains("_No scenarios executed._"));
    }

    #[test]
    fn json_report_is_parseable() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &sample_results()).expect("json report");
        let parsed: Vec<ScenarioResult> = serde_json::from_slice(&buf).expect("parse report");
        assert_eq!(parsed.len(), 2);
        assert!(parsed[0].passed);
        assert_eq!(parsed[1].runner, "chrome");
    }

    #[test]
    fn markdown_report_lists_failures() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &sample_results()).expect("markdown report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("- **Failed**: 1"));
        assert!(text.contains("| smoke | logic | ✅ |"));
        assert!(text.contains("### hash-load (chrome)"));
    }

    #[test]
    fn console_report_names_fastest_and_slowest() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &sample_results(), Duration::from_millis(50))
            .expect("console report");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("Success rate: 50.0%"));
        assert!(text.contains("Fastest: smoke"));
        assert!(text.contains("Slowest: hash-load"));
    }
}
