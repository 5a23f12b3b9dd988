use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use giving_ui::preferences::Preferences;
use giving_ui::{export, logging, mount, session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Giving calculator: see a pledge per day, week, month, year and in total.
///
/// Without `--set` or `--export-csv` an interactive session reads edits from
/// stdin, one per line (`day 10`, `total=36000`, `help`).
#[derive(Debug, Parser)]
#[command(name = "giving-calculator", version, about)]
struct Cli {
    /// Pledge term in years. Malformed values fall back to 3.
    #[arg(long)]
    years: Option<String>,

    /// Comma-separated gift levels, e.g. `1000,500`. Malformed lists fall back
    /// to the built-in levels.
    #[arg(long)]
    gift_levels: Option<String>,

    /// Preferences file (TOML). Defaults to `giving-calculator.toml` in the
    /// working directory when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Type a value into a field, e.g. `--set day=10`. Repeatable; applied in order.
    #[arg(long = "set", value_name = "FIELD=AMOUNT")]
    set: Vec<String>,

    /// Write the reference table to this CSV file.
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,giving_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Keep log output off stdout.
    #[arg(short, long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let prefs = match &cli.config {
        Some(path) => Preferences::load(path)?,
        None => Preferences::load_default()?,
    };

    let _log_guard = logging::init(&prefs.log_settings(cli.log_level, cli.log_file, cli.quiet))?;

    let overrides = prefs.overrides(cli.years, cli.gift_levels);
    debug!(?overrides, "mounting widget");
    let mut widget = mount(&overrides);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.set.is_empty() && cli.export_csv.is_none() {
        session::run(io::stdin().lock(), &mut out, &mut widget)?;
    } else {
        for assignment in &cli.set {
            let (denomination, value) = session::parse_assignment(assignment)
                .with_context(|| format!("invalid --set value: {assignment}"))?;
            let outcome = widget
                .edit(denomination, &value)
                .with_context(|| format!("rejected --set value: {assignment}"))?;
            debug!(%denomination, ?outcome, "applied --set");
        }
        writeln!(out, "{}", widget.render())?;

        if let Some(path) = &cli.export_csv {
            let rows = export::export_to_path(path, &widget)?;
            writeln!(out, "Wrote {rows} gift levels to {}", path.display())?;
        }
    }

    Ok(())
}
