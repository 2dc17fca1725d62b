//! Collectors for the Linux `/proc` filesystem.
//!
//! `process` reads per-process limits and descriptor tables, `system` reads
//! the kernel-wide ceiling, `parser` holds the pure parsers both use.

pub mod parser;
pub mod process;
pub mod system;

pub use process::{CollectError, ProcessCollector};
pub use system::SystemCollector;
