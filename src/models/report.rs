use serde::{Deserialize, Serialize};

/// A single `ip -> count` row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpTally {
    pub ip: String,
    pub count: u64,
}

impl IpTally {
    pub fn new(ip: impl Into<String>, count: u64) -> Self {
        IpTally {
            ip: ip.into(),
            count,
        }
    }
}

/// Frozen result of one analysis pass, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficReport {
    pub total_sampled_logs: u64,
    /// Busiest IPs, count descending
    pub top_ips: Vec<IpTally>,
    /// Every IP with a non-zero suspicion score, in first-flagged order
    pub suspicious_ips: Vec<IpTally>,
}
