use serde::Serialize;

/// One successfully parsed access log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub source_ip: String,
    pub country_code: String,
    /// Raw timestamp text, kept exactly as it appears between the brackets
    pub timestamp: String,
    pub http_method: String,
    pub request_path: String,
    pub status_code: u16,
    pub user_agent: String,
}
