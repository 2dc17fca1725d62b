//! In-memory proc trees for exercising the collectors and the reporter.
//!
//! `MockFs` stores files, directories and permission-denied paths in memory;
//! `scenarios` builds ready-made process tables on top of it.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::limits_table;
