//! Command entry points shared by the binary
//!
//! Each run either produces its normal output or, when the log cannot be read,
//! exactly [`READ_ERROR_MESSAGE`] and nothing else.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::analyzer::{AnalysisError, LogAnalyzer};
use crate::config::Config;
use crate::input::LogReader;
use crate::output::{OutputFormat, OutputHandler, READ_ERROR_MESSAGE};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Normal output was written
    Completed,
    /// The log could not be read; only the fixed error message was written
    Unreadable,
}

/// Analyse the configured log and write the report.
///
/// The report goes to `config.report.file_path` when set, otherwise to `out`.
/// The error message always goes to `out`.
pub fn run_analysis(config: &Config, out: &mut dyn Write) -> Result<RunStatus, Box<dyn Error>> {
    let path = &config.input.log_file_path;
    let aggregator = match LogAnalyzer::new().and_then(|analyzer| analyzer.analyze_path(path)) {
        Ok(aggregator) => aggregator,
        Err(e) => return report_failure(path, &e, out),
    };

    let format = OutputFormat::from_str(&config.report.format);
    let mut output_handler = match &config.report.file_path {
        Some(file_path) => OutputHandler::new(format, Some(file_path.clone()))?,
        None => OutputHandler::with_writer(format, Box::new(out)),
    };
    output_handler.write_report(&aggregator.report(config.report.top_n))?;

    Ok(RunStatus::Completed)
}

/// Write up to `limit` parsed records from `path` as JSON lines
pub fn show_records(path: &Path, limit: usize, out: &mut dyn Write) -> Result<RunStatus, Box<dyn Error>> {
    let analyzer = match LogAnalyzer::new() {
        Ok(analyzer) => analyzer,
        Err(e) => return report_failure(path, &e, out),
    };
    let reader = match LogReader::open(path) {
        Ok(reader) => reader,
        Err(e) => return report_failure(path, &AnalysisError::Read(e), out),
    };

    let mut shown = 0;
    for line in reader {
        if shown >= limit {
            break;
        }
        let line = match line {
            Ok(line) => line,
            Err(e) => return report_failure(path, &AnalysisError::Read(e), out),
        };
        if let Some(record) = analyzer.parser().parse_line(&line) {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
            shown += 1;
        }
    }
    log::info!("Displayed {} record(s) from {:?}", shown, path);

    Ok(RunStatus::Completed)
}

fn report_failure(
    path: &Path,
    error: &AnalysisError,
    out: &mut dyn Write,
) -> Result<RunStatus, Box<dyn Error>> {
    log::debug!("Error reading {:?}: {}", path, error);
    writeln!(out, "{}", READ_ERROR_MESSAGE)?;
    out.flush()?;
    Ok(RunStatus::Unreadable)
}
