//! Single-pass log analysis
//!
//! Reads a log front to back, parses what it can and folds every record into
//! a [`TrafficAggregator`]. Lines that do not fit the grammar are dropped.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::detection::TrafficAggregator;
use crate::input::{LogParser, LogReader};

/// Errors that abort an analysis run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read log file: {0}")]
    Read(#[from] io::Error),

    #[error("Invalid log grammar: {0}")]
    Grammar(#[from] regex::Error),
}

/// Drives reader, parser and aggregator over one log
pub struct LogAnalyzer {
    parser: LogParser,
}

impl LogAnalyzer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(LogAnalyzer {
            parser: LogParser::new()?,
        })
    }

    pub fn parser(&self) -> &LogParser {
        &self.parser
    }

    /// Analyse the log file at `path`.
    ///
    /// Any failure to open or read the file aborts the run; no partial
    /// aggregate is returned.
    pub fn analyze_path(&self, path: &Path) -> Result<TrafficAggregator, AnalysisError> {
        log::info!("Analysing log file: {:?}", path);
        let reader = LogReader::open(path)?;
        self.analyze_lines(reader)
    }

    /// Analyse an arbitrary line source
    pub fn analyze_lines<I>(&self, lines: I) -> Result<TrafficAggregator, AnalysisError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut aggregator = TrafficAggregator::new();
        let mut skipped: u64 = 0;

        for line in lines {
            match self.parser.parse_line(&line?) {
                Some(record) => aggregator.record(&record),
                None => skipped += 1,
            }
        }

        log::debug!(
            "Parsed {} record(s), skipped {} line(s)",
            aggregator.total_records(),
            skipped
        );

        Ok(aggregator)
    }
}
