//! Descriptor usage collection from the Linux `/proc` filesystem.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       Reporter                        │
//! │  ┌─────────────────────┐   ┌───────────────────────┐  │
//! │  │  ProcessCollector   │   │    SystemCollector    │  │
//! │  │  - /proc/[pid]/fd   │   │  - /proc/sys/fs/      │  │
//! │  │  - /proc/[pid]/     │   │      file-max         │  │
//! │  │      limits         │   │                       │  │
//! │  └──────────┬──────────┘   └───────────┬───────────┘  │
//! │             └─────────────┬────────────┘              │
//! │                    ┌──────▼──────┐                    │
//! │                    │  FileSystem │ (trait)            │
//! │                    └──────┬──────┘                    │
//! └───────────────────────────┼───────────────────────────┘
//!                     ┌───────┴───────┐
//!              ┌──────▼──────┐ ┌──────▼──────┐
//!              │   RealFs    │ │   MockFs    │
//!              └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ofilemax::collector::{MockFs, ProcessCollector};
//!
//! let collector = ProcessCollector::new(MockFs::typical_system(), "/proc");
//! let pids = collector.list_pids().unwrap();
//! let usage = collector.collect_process(pids[0]).unwrap();
//! assert_eq!(usage.pid, 1);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, ProcessCollector, SystemCollector};
pub use traits::{FileSystem, RealFs};
