//! Parsers for the `/proc` files the reporter reads.
//!
//! These are pure functions over file contents so they can be tested with
//! string inputs.

use crate::model::{FdLimits, Limit};

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Label of the `RLIMIT_NOFILE` row in `/proc/[pid]/limits`.
const OPEN_FILES_ROW: &str = "Max open files";

/// Parses one limit value: a decimal or the word `unlimited`.
pub fn parse_limit(value: &str) -> Result<Limit, ParseError> {
    if value == "unlimited" {
        return Ok(Limit::Unlimited);
    }
    value
        .parse::<u64>()
        .map(Limit::Finite)
        .map_err(|_| ParseError::new(format!("invalid limit value '{}'", value)))
}

/// Parses the open files limits out of `/proc/[pid]/limits`.
///
/// Format (columns are space padded, the limit name itself has spaces):
/// ```text
/// Limit                     Soft Limit           Hard Limit           Units
/// Max open files            1024                 524288               files
/// ```
pub fn parse_fd_limits(content: &str) -> Result<FdLimits, ParseError> {
    let row = content
        .lines()
        .find_map(|line| line.strip_prefix(OPEN_FILES_ROW))
        .ok_or_else(|| ParseError::new("missing 'Max open files' in limits"))?;

    let mut values = row.split_whitespace();
    let soft = values
        .next()
        .ok_or_else(|| ParseError::new("missing soft limit"))?;
    let hard = values
        .next()
        .ok_or_else(|| ParseError::new("missing hard limit"))?;

    Ok(FdLimits {
        soft: parse_limit(soft)?,
        hard: parse_limit(hard)?,
    })
}

/// Parses `/proc/sys/fs/file-max`: a single decimal on one line.
pub fn parse_file_max(content: &str) -> Result<u64, ParseError> {
    let value = content.trim();
    value
        .parse()
        .map_err(|_| ParseError::new(format!("invalid file-max '{}'", value)))
}

/// Returns the PID named by a `/proc` entry, if the name is all decimal digits.
pub fn parse_pid(name: &str) -> Option<u32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::limits_table;

    #[test]
    fn test_parse_fd_limits_basic() {
        let limits = parse_fd_limits(&limits_table("1024", "524288")).unwrap();
        assert_eq!(limits.soft, Limit::Finite(1024));
        assert_eq!(limits.hard, Limit::Finite(524288));
    }

    #[test]
    fn test_parse_fd_limits_unlimited() {
        let limits = parse_fd_limits(&limits_table("unlimited", "unlimited")).unwrap();
        assert_eq!(limits.soft, Limit::Unlimited);
        assert_eq!(limits.hard, Limit::Unlimited);
    }

    #[test]
    fn test_parse_fd_limits_single_row() {
        let limits = parse_fd_limits("Max open files 256 1024 files\n").unwrap();
        assert_eq!(limits.soft, Limit::Finite(256));
        assert_eq!(limits.hard, Limit::Finite(1024));
    }

    #[test]
    fn test_parse_fd_limits_missing_row() {
        let content = "\
Limit                     Soft Limit           Hard Limit           Units
Max processes             63229                63229                processes
";
        let err = parse_fd_limits(content).unwrap_err();
        assert!(err.message.contains("Max open files"));
    }

    #[test]
    fn test_parse_fd_limits_truncated_row() {
        assert!(parse_fd_limits("Max open files            1024\n").is_err());
        assert!(parse_fd_limits("Max open files\n").is_err());
    }

    #[test]
    fn test_parse_fd_limits_garbage_value() {
        let err = parse_fd_limits("Max open files  lots  1024  files\n").unwrap_err();
        assert_eq!(err.message, "invalid limit value 'lots'");
    }

    #[test]
    fn test_parse_file_max() {
        assert_eq!(parse_file_max("1048576\n").unwrap(), 1048576);
        assert_eq!(
            parse_file_max("9223372036854775807\n").unwrap(),
            9223372036854775807
        );
        assert!(parse_file_max("").is_err());
        assert!(parse_file_max("-1\n").is_err());
    }

    #[test]
    fn test_parse_pid() {
        assert_eq!(parse_pid("1"), Some(1));
        assert_eq!(parse_pid("4194304"), Some(4194304));
        assert_eq!(parse_pid("self"), None);
        assert_eq!(parse_pid("1a2b"), None);
        assert_eq!(parse_pid("+5"), None);
        assert_eq!(parse_pid(""), None);
    }
}
