//! Per-IP traffic aggregation
//!
//! Keeps request volume and suspicion tallies for every source IP seen during
//! a single pass over a log.

use crate::detection::{FrequencyTable, SuspicionHeuristic};
use crate::models::{LogRecord, TrafficReport};

/// Default number of rows in the "Top IPs" section
pub const DEFAULT_TOP_N: usize = 10;

/// Accumulates request counts and suspicion scores per source IP
#[derive(Debug, Clone, Default)]
pub struct TrafficAggregator {
    request_counts: FrequencyTable,
    /// Only IPs that tripped at least one heuristic ever get an entry
    suspicion_scores: FrequencyTable,
    total_records: u64,
}

impl TrafficAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed record into the tables
    pub fn record(&mut self, record: &LogRecord) {
        self.total_records += 1;
        self.request_counts.increment(&record.source_ip);

        for rule in SuspicionHeuristic::ALL {
            if rule.triggered(record) {
                let score = self.suspicion_scores.increment(&record.source_ip);
                log::debug!(
                    "[{}] {} {} from {} (score {})",
                    rule.name(),
                    record.http_method,
                    record.request_path,
                    record.source_ip,
                    score
                );
            }
        }
    }

    /// Number of records folded in so far
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn request_counts(&self) -> &FrequencyTable {
        &self.request_counts
    }

    pub fn suspicion_scores(&self) -> &FrequencyTable {
        &self.suspicion_scores
    }

    pub fn request_count(&self, ip: &str) -> u64 {
        self.request_counts.get(ip).unwrap_or(0)
    }

    pub fn suspicion_score(&self, ip: &str) -> u64 {
        self.suspicion_scores.get(ip).unwrap_or(0)
    }

    /// Freeze the current state into a report with at most `top_n` ranked IPs
    pub fn report(&self, top_n: usize) -> TrafficReport {
        TrafficReport {
            total_sampled_logs: self.total_records,
            top_ips: self.request_counts.ranked(top_n),
            suspicious_ips: self.suspicion_scores.tallies(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpTally;

    fn create_record(ip: &str, method: &str, path: &str) -> LogRecord {
        LogRecord {
            source_ip: ip.to_string(),
            country_code: "US".to_string(),
            timestamp: "01/Jan/2024:00:00:00".to_string(),
            http_method: method.to_string(),
            request_path: path.to_string(),
            status_code: 200,
            user_agent: "Mozilla/5.0".to_string(),
        }
    }

    #[test]
    fn test_benign_record_counts_without_suspicion() {
        let mut aggregator = TrafficAggregator::new();
        aggregator.record(&create_record("1.2.3.4", "GET", "/index.html"));

        assert_eq!(aggregator.total_records(), 1);
        assert_eq!(aggregator.request_count("1.2.3.4"), 1);
        assert_eq!(aggregator.suspicion_score("1.2.3.4"), 0);
        assert!(aggregator.suspicion_scores().is_empty());
    }

    #[test]
    fn test_put_to_login_scores_two() {
        let mut aggregator = TrafficAggregator::new();
        aggregator.record(&create_record("9.9.9.9", "PUT", "/login"));

        assert_eq!(aggregator.suspicion_score("9.9.9.9"), 2);
        assert_eq!(aggregator.request_count("9.9.9.9"), 1);
    }

    #[test]
    fn test_scores_accumulate_across_records() {
        let mut aggregator = TrafficAggregator::new();
        aggregator.record(&create_record("5.5.5.5", "PUT", "/upload"));
        aggregator.record(&create_record("5.5.5.5", "POST", "/login"));
        aggregator.record(&create_record("5.5.5.5", "GET", "/"));
        aggregator.record(&create_record("6.6.6.6", "GET", "/"));

        assert_eq!(aggregator.suspicion_score("5.5.5.5"), 2);
        assert_eq!(aggregator.suspicion_score("6.6.6.6"), 0);
        assert_eq!(aggregator.suspicion_scores().len(), 1);
    }

    #[test]
    fn test_request_counts_sum_to_total() {
        let mut aggregator = TrafficAggregator::new();
        let ips = ["1.1.1.1", "2.2.2.2", "1.1.1.1", "3.3.3.3", "1.1.1.1", "2.2.2.2"];
        for ip in ips {
            aggregator.record(&create_record(ip, "GET", "/"));
        }

        assert_eq!(aggregator.request_counts().total(), aggregator.total_records());
        assert_eq!(aggregator.total_records(), ips.len() as u64);
    }

    #[test]
    fn test_report_ranks_and_lists_suspicious() {
        let mut aggregator = TrafficAggregator::new();
        aggregator.record(&create_record("1.1.1.1", "GET", "/"));
        aggregator.record(&create_record("2.2.2.2", "PUT", "/a"));
        aggregator.record(&create_record("2.2.2.2", "GET", "/"));
        aggregator.record(&create_record("3.3.3.3", "GET", "/login"));

        let report = aggregator.report(DEFAULT_TOP_N);
        assert_eq!(report.total_sampled_logs, 4);
        assert_eq!(
            report.top_ips,
            vec![
                IpTally::new("2.2.2.2", 2),
                IpTally::new("1.1.1.1", 1),
                IpTally::new("3.3.3.3", 1),
            ]
        );
        assert_eq!(
            report.suspicious_ips,
            vec![IpTally::new("2.2.2.2", 1), IpTally::new("3.3.3.3", 1)]
        );
    }

    #[test]
    fn test_report_caps_top_ips() {
        let mut aggregator = TrafficAggregator::new();
        for i in 0..15 {
            aggregator.record(&create_record(&format!("10.0.0.{}", i), "GET", "/"));
        }

        let report = aggregator.report(DEFAULT_TOP_N);
        assert_eq!(report.top_ips.len(), DEFAULT_TOP_N);
        assert_eq!(report.total_sampled_logs, 15);
    }
}
