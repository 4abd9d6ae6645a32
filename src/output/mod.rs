use crate::models::TrafficReport;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Printed in place of the report when the log cannot be read
pub const READ_ERROR_MESSAGE: &str = "An error has occurred reading log file";

/// Output handler for traffic reports
pub struct OutputHandler<'a> {
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "console" => OutputFormat::Console,
            _ => OutputFormat::Console, // Default
        }
    }
}

impl<'a> OutputHandler<'a> {
    /// Create a new output handler writing to `file_path`, or stdout when `None`
    pub fn new(format: OutputFormat, file_path: Option<PathBuf>) -> io::Result<Self> {
        let writer: Box<dyn Write + 'a> = match file_path {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout()),
        };

        Ok(OutputHandler { format, writer })
    }

    /// Create an output handler over any writer
    pub fn with_writer(format: OutputFormat, writer: Box<dyn Write + 'a>) -> Self {
        OutputHandler { format, writer }
    }

    /// Write a traffic report
    pub fn write_report(&mut self, report: &TrafficReport) -> Result<(), Box<dyn std::error::Error>> {
        let output = match self.format {
            OutputFormat::Console => render_console(report),
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        };
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render the plain-text summary
pub fn render_console(report: &TrafficReport) -> String {
    let mut out = String::new();
    out.push_str("===== LOG ANALYSIS =====\n");
    out.push_str(&format!("Total Sampled Logs: {}\n", report.total_sampled_logs));

    out.push_str("\nTop IPs by Request Count:\n");
    for tally in &report.top_ips {
        out.push_str(&format!("{} -> {} requests\n", tally.ip, tally.count));
    }

    out.push_str("\nSuspicious IPs:\n");
    for tally in &report.suspicious_ips {
        out.push_str(&format!("{} -> {} suspicious actions\n", tally.ip, tally.count));
    }
    out
}
