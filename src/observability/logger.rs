//! Structured JSON logger
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then sorted fields)
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
    /// Unrecoverable, prediction disabled or process exits
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger
pub struct Logger;

impl Logger {
    /// Log a normal-operations event to stdout
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log a recoverable issue to stdout
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log an operation failure to stderr
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Error, event, fields, &mut io::stderr());
    }

    /// Log an unrecoverable failure to stderr
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(Severity::Fatal, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // Build the line manually for deterministic key ordering
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push('"');

        output.push_str(",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push('}');
        output.push('\n');

        // One write, one flush, one line
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = capture(Severity::Info, "PREDICTION_SERVED", &[]);
        assert_eq!(
            line,
            "{\"event\":\"PREDICTION_SERVED\",\"severity\":\"INFO\"}\n"
        );
    }

    #[test]
    fn test_fields_sorted_alphabetically() {
        let line = capture(
            Severity::Error,
            "PREDICTION_FAILED",
            &[("request_id", "abc"), ("cause", "shape mismatch")],
        );
        let cause_pos = line.find("\"cause\"").unwrap();
        let request_pos = line.find("\"request_id\"").unwrap();
        assert!(cause_pos < request_pos);
    }

    #[test]
    fn test_values_are_escaped() {
        let line = capture(Severity::Warn, "ODD", &[("detail", "a\"b\nc")]);
        assert!(line.contains("a\\\"b\\nc"));
        // Still exactly one line
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_deterministic_output() {
        let fields = [("a", "1"), ("b", "2")];
        assert_eq!(
            capture(Severity::Info, "X", &fields),
            capture(Severity::Info, "X", &fields)
        );
    }
}
