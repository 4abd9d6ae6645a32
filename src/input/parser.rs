//! Access log grammar
//!
//! Lines are expected in the form
//!
//! ```text
//! <ip> - <country> - [<timestamp>] "<method> <path> HTTP/<ver>" <status> <bytes> "<referrer>" "<user-agent>" <extra-bytes>
//! ```
//!
//! Each variable field is a named capture so the literal/variable split of the
//! grammar can be read straight off [`GRAMMAR`].

use regex::Regex;

use crate::models::LogRecord;

/// Named-capture pattern for one access log record.
///
/// Digit classes are spelled `[0-9]` so only ASCII digits count, and token
/// fields stop only at ASCII whitespace (`[^ \t\n\x0B\f\r]`). The pattern is
/// searched rather than anchored, so text before or after a conforming record
/// does not reject the line.
pub const GRAMMAR: &str = concat!(
    r"(?P<ip>[^ \t\n\x0B\f\r]+) - (?P<country>[^ \t\n\x0B\f\r]+) - ",
    r"\[(?P<timestamp>[^\]]*)\] ",
    r#""(?P<method>[^ \t\n\x0B\f\r]+) (?P<path>.*?) HTTP/[0-9]\.[0-9]" "#,
    r"(?P<status>[0-9]{3}) [0-9]+ ",
    r#""[^"]*" "(?P<user_agent>[^"]*)" [0-9]+"#,
);

/// Turns raw access log lines into [`LogRecord`]s
#[derive(Debug, Clone)]
pub struct LogParser {
    grammar: Regex,
}

impl LogParser {
    /// Compile the access log grammar
    pub fn new() -> Result<Self, regex::Error> {
        Ok(LogParser {
            grammar: Regex::new(GRAMMAR)?,
        })
    }

    /// Parse a single line.
    ///
    /// Returns `None` for anything that does not fit the grammar; the caller is
    /// expected to drop such lines without further noise.
    pub fn parse_line(&self, line: &str) -> Option<LogRecord> {
        let caps = self.grammar.captures(line)?;
        let field = |name: &str| caps.name(name).map(|m| m.as_str().to_string());

        Some(LogRecord {
            source_ip: field("ip")?,
            country_code: field("country")?,
            timestamp: field("timestamp")?,
            http_method: field("method")?,
            request_path: field("path")?,
            status_code: caps.name("status")?.as_str().parse().ok()?,
            user_agent: field("user_agent")?,
        })
    }
}
