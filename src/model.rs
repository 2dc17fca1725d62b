//! Snapshot data model: resource limits and per-process descriptor usage.

use std::fmt;

/// One side of a resource limit as the kernel reports it.
///
/// Variant order matters: any finite value sorts below `Unlimited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Limit {
    Finite(u64),
    Unlimited,
}

impl Limit {
    /// Returns the finite value, or `None` for `Unlimited`.
    pub fn finite(self) -> Option<u64> {
        match self {
            Limit::Finite(n) => Some(n),
            Limit::Unlimited => None,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for both variants.
        match self {
            Limit::Finite(n) => f.pad(&n.to_string()),
            Limit::Unlimited => f.pad("unlimited"),
        }
    }
}

/// `RLIMIT_NOFILE` of a process: the soft limit is enforced, the hard limit
/// is the ceiling the soft limit may be raised to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdLimits {
    pub soft: Limit,
    pub hard: Limit,
}

/// Open descriptor count and limits of one process, sampled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessFdUsage {
    pub pid: u32,
    pub open_files: u64,
    pub limits: FdLimits,
}

impl ProcessFdUsage {
    /// Percentage of the soft limit in use.
    ///
    /// An unlimited soft limit is measured against `file_max`, the most
    /// descriptors the process could get in practice. Returns `None` when
    /// there is nothing to divide by (unlimited without a known `file_max`,
    /// or a zero limit).
    pub fn utilization(&self, file_max: Option<u64>) -> Option<f64> {
        let limit = self.limits.soft.finite().or(file_max)?;
        if limit == 0 {
            return None;
        }
        Some(self.open_files as f64 / limit as f64 * 100.0)
    }
}
