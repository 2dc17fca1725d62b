//! Text formatting of the report table.
//!
//! Column layout (all right-aligned, single space separated):
//! `PID` 6, `RATE%` 7 including the sign, `OPENFILE`/`SOFT-MAX`/`HARD-MAX` 8.

use crate::model::ProcessFdUsage;

/// Static guidance printed under the ceiling line.
pub const HEADER_GUIDANCE: [&str; 3] = [
    "# Check /etc/security/limits.conf per user's default limits",
    "# Check /etc/sysctl.conf for system limits",
    "#",
];

/// Column titles and their underline.
pub const HEADER_COLUMNS: [&str; 2] = [
    "#  PID   RATE% OPENFILE SOFT-MAX HARD-MAX",
    "# ---- ------- -------- -------- --------",
];

/// Formats the first header line naming the kernel ceiling.
pub fn format_file_max_line(file_max_path: &str, file_max: u64) -> String {
    format!("# System Max Open Files ({}): {}", file_max_path, file_max)
}

/// Formats a utilization percentage into the 7-column `RATE%` cell.
///
/// `None` (nothing to divide by) renders as `n/a`.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:6.2}%", rate),
        None => format!("{:>7}", "n/a"),
    }
}

/// Formats one report row.
pub fn format_row(usage: &ProcessFdUsage, file_max: Option<u64>) -> String {
    format!(
        "{:>6} {} {:>8} {:>8} {:>8}",
        usage.pid,
        format_rate(usage.utilization(file_max)),
        usage.open_files,
        usage.limits.soft,
        usage.limits.hard,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FdLimits, Limit};

    fn usage(pid: u32, open_files: u64, soft: Limit, hard: Limit) -> ProcessFdUsage {
        ProcessFdUsage {
            pid,
            open_files,
            limits: FdLimits { soft, hard },
        }
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(4.8828125)), "  4.88%");
        assert_eq!(format_rate(Some(100.0)), "100.00%");
        assert_eq!(format_rate(Some(0.0)), "  0.00%");
        assert_eq!(format_rate(None), "    n/a");
    }

    #[test]
    fn test_format_row() {
        let row = format_row(
            &usage(100, 10, Limit::Finite(256), Limit::Finite(1024)),
            Some(1048576),
        );
        assert_eq!(row, "   100   3.91%       10      256     1024");
    }

    #[test]
    fn test_format_row_fifty_of_1024() {
        let row = format_row(
            &usage(812, 50, Limit::Finite(1024), Limit::Finite(4096)),
            None,
        );
        assert_eq!(row, "   812   4.88%       50     1024     4096");
    }

    #[test]
    fn test_format_row_unlimited() {
        let u = usage(300, 25, Limit::Unlimited, Limit::Unlimited);
        assert_eq!(
            format_row(&u, Some(1000)),
            "   300   2.50%       25 unlimited unlimited"
        );
        assert_eq!(
            format_row(&u, None),
            "   300     n/a       25 unlimited unlimited"
        );
    }

    #[test]
    fn test_header_columns_line_up_with_rows() {
        let row = format_row(
            &usage(1, 64, Limit::Finite(1024), Limit::Finite(524288)),
            None,
        );
        assert_eq!(HEADER_COLUMNS[0].len(), row.len());
        assert_eq!(HEADER_COLUMNS[1].len(), row.len());
    }

    #[test]
    fn test_format_file_max_line() {
        assert_eq!(
            format_file_max_line("/proc/sys/fs/file-max", 1048576),
            "# System Max Open Files (/proc/sys/fs/file-max): 1048576"
        );
    }
}
