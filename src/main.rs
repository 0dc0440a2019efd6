//! wallet-ui scenario replay
//!
//! Usage:
//!   cargo run -- --scenario samples/scenarios/max-button.yaml
//!   cargo run -- --all
//!   cargo run -- --all --dir samples/scenarios --json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use wallet_ui::cli::{CliArgs, ReplayTarget};
use wallet_ui::config::AppConfig;
use wallet_ui::config_paths;
use wallet_ui::scenario::{self, Scenario, ScenarioRun};
use wallet_ui::theme::{self, Theme};

fn main() -> Result<()> {
    wallet_ui::tracing::init();

    let args = CliArgs::parse();
    let target = args.target().map_err(anyhow::Error::msg)?;
    let config = AppConfig::load();

    let scenarios = match target {
        ReplayTarget::File(path) => vec![(path.clone(), scenario::load(&path)?)],
        ReplayTarget::Directory(dir) => scenario::load_dir(&dir)?,
    };

    let mut failed = 0;
    for (path, scenario) in &scenarios {
        let theme = resolve_theme(args.theme.as_deref(), scenario, &config);
        let run = scenario::run(scenario, &theme);
        tracing::info!("replayed {} ({} steps)", path.display(), run.records.len());

        if args.json {
            print_json(&run)?;
        } else {
            print_table(path, &run);
        }

        if !run.passed() {
            failed += 1;
            for failure in &run.failures {
                eprintln!("  FAIL {}", failure);
            }
        }
    }

    if let Some(log) = config_paths::log_file() {
        eprintln!("Debug log: {}", log.display());
    }

    if failed > 0 {
        anyhow::bail!("{} of {} scenario(s) failed", failed, scenarios.len());
    }
    eprintln!("{} scenario(s) passed", scenarios.len());
    Ok(())
}

/// CLI override, then the scenario's theme, then the configured theme. A
/// theme reference may be a file path or a theme id.
fn resolve_theme(cli_theme: Option<&str>, scenario: &Scenario, config: &AppConfig) -> Theme {
    let Some(theme_ref) = cli_theme.or(scenario.theme.as_deref()) else {
        return config.theme();
    };

    let path = PathBuf::from(theme_ref);
    if path.exists() {
        match theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => tracing::warn!("failed to load theme file {}: {}", theme_ref, e),
        }
    }

    match theme::load_theme(theme_ref) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("failed to load theme {:?}: {}, using default", theme_ref, e);
            Theme::default()
        }
    }
}

fn print_json(run: &ScenarioRun) -> Result<()> {
    for record in &run.records {
        let line = serde_json::to_string(record)
            .with_context(|| format!("serializing step {} of {}", record.index, run.name))?;
        println!("{}", line);
    }
    Ok(())
}

fn print_table(path: &Path, run: &ScenarioRun) {
    println!("{} ({})", run.name, path.display());
    for record in &run.records {
        println!(
            "  {:>2}  {:<20} {:<16} display={:<12?} external={:<12?}{}{}",
            record.index,
            record.action,
            record.reconciliation,
            record.display,
            record.external,
            if record.focused { " focused" } else { "" },
            if record.armed { " armed" } else { "" },
        );
    }
}
