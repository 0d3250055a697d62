//! `zigx-build-hook` entry point.
//!
//! Run by the packaging pipeline before artifact collection. Exits 0 for
//! every toolchain outcome; only invalid arguments fail.

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use zigx_cli::{HookCli, handlers, presentation};
use zigx_core::ProcessEnv;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    zigx_cli::logging::init();

    let cli = HookCli::parse();

    let report = match handlers::hook::execute(&cli, &ProcessEnv) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    presentation::render_report(&report, &mut std::io::stderr())
        .context("Failed to write hook diagnostics")?;

    if cli.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)
            .context("Failed to serialize hook report")?;
        writeln!(stdout).context("Failed to write hook report")?;
    }

    Ok(())
}
