//! ofilemax - open file descriptor usage of every process.
//!
//! Provides:
//! - `collector` - `/proc` readers behind the `FileSystem` trait (real or mock)
//! - `model` - limits and per-process descriptor usage
//! - `fmt` - table formatting
//! - `report` - the snapshot reporter tying them together
//! - `cli` - command-line arguments

pub mod cli;
pub mod collector;
pub mod fmt;
pub mod model;
pub mod report;

pub use model::{FdLimits, Limit, ProcessFdUsage};
pub use report::{ReportConfig, ReportError, ReportSummary, Reporter};
