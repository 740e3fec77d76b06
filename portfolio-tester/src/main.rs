mod browser;
mod cli;
mod common;
mod logic;
mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use portfolio_core::SiteConfig;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use cli::Args;
use common::scenario::list_scenarios;
use logic::reports::write_report;
use runner::Runner;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut out = open_output(args.output.as_deref())?;

    if args.list_scenarios {
        writeln!(out, "Available scenarios:")?;
        for (name, description) in list_scenarios() {
            writeln!(out, "  {name:20} - {description}")?;
        }
        out.flush()?;
        return Ok(());
    }

    println!("{}", "🧭 Portfolio Automated Tester".bright_cyan().bold());

    let config = SiteConfig::load_from_static();
    if let Err(err) = config.validate() {
        log::warn!("bundled site configuration is invalid: {err}");
    }

    let started = Instant::now();
    let results = Runner::new(&args, config).run().await;
    write_report(args.report, &mut out, &results, started.elapsed())?;
    out.flush()?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

/// Report sink: the `--output` file, or stdout.
fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout())),
    })
}
