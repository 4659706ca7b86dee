//! Output formatting and logging utilities

use color_eyre::eyre::Result;
use std::fmt;
use std::io::Write;
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

use crate::energy::EnergyReport;

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup logging to file or stdout
pub fn setup_output(log_path: Option<&String>) {
    match log_path {
        Some(path) => {
            if let Ok(log) = std::fs::File::create(path) {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default().with(file_layer).init();
                info!("Log output will be written to: {}", path);
            } else {
                eprintln!("Could not create log file: {}", path);
            }
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// Print the final energy report to a writer
pub fn print_energy_report<W: Write>(writer: &mut W, report: &EnergyReport) -> Result<()> {
    writeln!(writer, "Hartree-Fock energy:  {:.12} Eh", report.hartree_fock)?;
    writeln!(writer, "MP2 correction:       {:.12} Eh", report.mp2_correction)?;
    writeln!(writer, "Total energy:         {:.12} Eh", report.total)?;
    for term in &report.skipped_terms {
        writeln!(
            writer,
            "Skipped zero-denominator term ({},{}|{},{})",
            term.indices[0], term.indices[1], term.indices[2], term.indices[3]
        )?;
    }
    Ok(())
}
