//! Fixed suspicion heuristics
//!
//! Both checks are deliberately naive string tests. Each one that fires for a
//! record adds one point to that record's source IP.

use crate::models::LogRecord;

/// A single rule that can mark a record as suspicious
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspicionHeuristic {
    /// Any request using the `PUT` method (exact, case-sensitive)
    PutMethod,
    /// Any request path containing `login`, query string included
    LoginPath,
}

impl SuspicionHeuristic {
    /// Every heuristic, in evaluation order
    pub const ALL: [SuspicionHeuristic; 2] =
        [SuspicionHeuristic::PutMethod, SuspicionHeuristic::LoginPath];

    pub fn triggered(&self, record: &LogRecord) -> bool {
        match self {
            SuspicionHeuristic::PutMethod => record.http_method == "PUT",
            SuspicionHeuristic::LoginPath => record.request_path.contains("login"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuspicionHeuristic::PutMethod => "PUT Request",
            SuspicionHeuristic::LoginPath => "Login Path Request",
        }
    }
}
