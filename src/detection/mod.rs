pub mod aggregator;
pub mod frequency;
pub mod heuristics;

pub use aggregator::{TrafficAggregator, DEFAULT_TOP_N};
pub use frequency::FrequencyTable;
pub use heuristics::SuspicionHeuristic;
