//! Human-readable rendering of hook reports.

use std::io::{self, Write};

use zigx_core::{Diagnostic, DiagnosticLevel, HookReport, HookStep};

fn marker(diagnostic: &Diagnostic) -> &'static str {
    match diagnostic.level {
        DiagnosticLevel::Warning => "⚠️  Warning:",
        DiagnosticLevel::Error => "❌",
        DiagnosticLevel::Notice => match diagnostic.step {
            Some(HookStep::Skip) => "⏭️ ",
            Some(HookStep::Compile) => "🔨",
            Some(HookStep::Toolchain) => "🐺",
            Some(HookStep::Build) => "🏗️ ",
            Some(HookStep::Fallback) => "🔄",
            Some(HookStep::Success) => "✅",
            None => "  ",
        },
    }
}

/// Write every diagnostic of `report`, one per line.
pub fn render_report(report: &HookReport, out: &mut dyn Write) -> io::Result<()> {
    for diagnostic in &report.diagnostics {
        writeln!(out, "{} {}", marker(diagnostic), diagnostic.message)?;
    }
    Ok(())
}
