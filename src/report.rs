//! Snapshot reporter: reads the ceiling, prints the header, then one row per
//! process whose descriptor data could be read.

use crate::collector::procfs::{CollectError, ProcessCollector, SystemCollector};
use crate::collector::traits::FileSystem;
use crate::fmt::{HEADER_COLUMNS, HEADER_GUIDANCE, format_file_max_line, format_row};
use std::io::{self, Write};
use tracing::{debug, trace};

/// Settings fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Print the comment block before the rows.
    pub show_headers: bool,
    /// Report processes that could not be inspected on the error stream.
    pub verbose: bool,
    /// Prefix of every diagnostic line.
    pub program_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_headers: true,
            verbose: false,
            program_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

/// Counters of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// PIDs found during enumeration.
    pub listed: usize,
    /// Rows written.
    pub reported: usize,
    /// PIDs whose data could not be read.
    pub skipped: usize,
}

/// Failures that end a run.
#[derive(Debug)]
pub enum ReportError {
    /// The process list itself could not be read.
    Enumerate { proc_path: String, source: CollectError },
    /// Writing the report failed.
    Output(io::Error),
}

impl ReportError {
    /// True when the reader of our output went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ReportError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Process exit status for a run that ended with this error.
    ///
    /// A closed pipe is a normal way for a reader to stop, so it maps to 0.
    pub fn exit_code(&self) -> u8 {
        if self.is_broken_pipe() { 0 } else { 1 }
    }
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Enumerate { proc_path, source } => {
                write!(f, "cannot list processes in {}: {}", proc_path, source)
            }
            ReportError::Output(e) => write!(f, "cannot write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Enumerate { source, .. } => Some(source),
            ReportError::Output(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Output(e)
    }
}

/// Produces the descriptor usage table for every visible process.
pub struct Reporter<F: FileSystem> {
    processes: ProcessCollector<F>,
    system: SystemCollector<F>,
    config: ReportConfig,
}

impl<F: FileSystem + Clone> Reporter<F> {
    /// Creates a reporter reading from `proc_path` through `fs`.
    pub fn new(fs: F, proc_path: impl Into<String>, config: ReportConfig) -> Self {
        let proc_path = proc_path.into();
        Self {
            processes: ProcessCollector::new(fs.clone(), proc_path.as_str()),
            system: SystemCollector::new(fs, proc_path),
            config,
        }
    }
}

impl<F: FileSystem> Reporter<F> {
    /// Runs one snapshot, writing the table to `out` and diagnostics to `err`.
    ///
    /// Per-process failures never end the run; only an unreadable process
    /// list or a failed write does.
    pub fn run<W: Write, E: Write>(
        &self,
        out: &mut W,
        err: &mut E,
    ) -> Result<ReportSummary, ReportError> {
        // Enumerate first so a fatal failure leaves stdout empty.
        let pids = self
            .processes
            .list_pids()
            .map_err(|source| ReportError::Enumerate {
                proc_path: self.processes.proc_path().to_string(),
                source,
            })?;

        let file_max = self.read_file_max(err)?;

        if self.config.show_headers {
            self.write_header(out, file_max)?;
        }

        let mut summary = ReportSummary {
            listed: pids.len(),
            ..Default::default()
        };

        for pid in pids {
            match self.processes.collect_process(pid) {
                Ok(usage) => {
                    trace!(pid, open_files = usage.open_files, "process row");
                    writeln!(out, "{}", format_row(&usage, file_max))?;
                    summary.reported += 1;
                }
                Err(e) => {
                    debug!(pid, error = %e, "skipping process");
                    summary.skipped += 1;
                    if self.config.verbose {
                        writeln!(
                            err,
                            "{}: cannot read open file information of pid {}",
                            self.config.program_name, pid
                        )?;
                    }
                }
            }
        }

        out.flush()?;
        debug!(
            listed = summary.listed,
            reported = summary.reported,
            skipped = summary.skipped,
            "report complete"
        );
        Ok(summary)
    }

    /// Reads the kernel ceiling; a failure is reported once and the run goes on.
    fn read_file_max<E: Write>(&self, err: &mut E) -> Result<Option<u64>, ReportError> {
        match self.system.collect_file_max() {
            Ok(file_max) => Ok(Some(file_max)),
            Err(e) => {
                debug!(error = %e, "file-max unavailable");
                writeln!(
                    err,
                    "{}: cannot read {}: {}",
                    self.config.program_name,
                    self.system.file_max_path(),
                    e
                )?;
                Ok(None)
            }
        }
    }

    fn write_header<W: Write>(&self, out: &mut W, file_max: Option<u64>) -> io::Result<()> {
        if let Some(file_max) = file_max {
            writeln!(
                out,
                "{}",
                format_file_max_line(&self.system.file_max_path(), file_max)
            )?;
        }
        for line in HEADER_GUIDANCE.iter().chain(HEADER_COLUMNS.iter()) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
