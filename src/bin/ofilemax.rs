//! ofilemax - one-shot report of open file descriptors per process.
//!
//! Usage:
//!   ofilemax                  # header + one row per readable process
//!   ofilemax -n               # rows only
//!   ofilemax -v               # also name processes that could not be read
//!   ofilemax --proc-path /host/proc

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use ofilemax::Reporter;
use ofilemax::cli::{EarlyExit, parse_or_diagnose};
use ofilemax::collector::RealFs;

/// Initializes the tracing subscriber.
///
/// Library diagnostics stay off unless `RUST_LOG` asks for them, so stderr
/// only carries the report's own messages.
fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "ofilemax=warn".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let invocation = match parse_or_diagnose(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(EarlyExit::Informational(e)) => e.exit(),
        Err(EarlyExit::Invalid { code, message }) => {
            eprintln!("{}", message);
            return ExitCode::from(code);
        }
    };

    init_logging();
    debug!(proc_path = %invocation.args.proc_path, "ofilemax {} starting", env!("CARGO_PKG_VERSION"));

    let reporter = Reporter::new(
        RealFs::new(),
        invocation.args.proc_path.as_str(),
        invocation.config(),
    );
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    match reporter.run(&mut out, &mut err) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            if code != 0 {
                eprintln!("{}: {}", invocation.program_name, e);
            }
            ExitCode::from(code)
        }
    }
}
