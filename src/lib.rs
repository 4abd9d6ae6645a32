pub mod analyzer;
pub mod config;
pub mod detection;
pub mod input;
pub mod models;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use analyzer::{AnalysisError, LogAnalyzer};
pub use detection::{FrequencyTable, SuspicionHeuristic, TrafficAggregator};
pub use input::{LogParser, LogReader};
pub use models::{IpTally, LogRecord, TrafficReport};
pub use output::{OutputFormat, OutputHandler};
pub use runner::RunStatus;
