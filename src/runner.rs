//! The per-process protocol every workload binary follows:
//! parse, prepare, measure, emit.

use std::io::{self, Write};
use std::process::ExitCode;

use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use crate::args::BenchArgs;
use crate::benches::Workload;
use crate::error::{BenchError, Result};
use crate::harness;
use crate::schema::BenchRecord;

/// Filter used when `RUST_LOG` is unset. Usage and size failures are then
/// reported only through the exit status.
const DEFAULT_LOG_FILTER: &str = "error";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Run workload `W` for `args` and return the filled record.
pub fn run<W: Workload>(args: &BenchArgs) -> Result<BenchRecord> {
    W::check_size(args.n)?;

    let mut input = W::prepare(args.n, args.seed)?;
    let mut record = BenchRecord::from(args);
    debug!(workload = W::NAME, n = args.n, seed = args.seed, "input prepared");

    let checksum = harness::measure(&mut record, || W::run(&mut input));
    debug!(workload = W::NAME, checksum, ?record, "measured");

    Ok(record)
}

/// Write `record` as one line. The line goes out in a single write so a
/// reader sees either the whole record or nothing.
pub fn emit<O: Write>(record: &BenchRecord, out: &mut O) -> Result<()> {
    let line = record.to_json_line()?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn try_main<W: Workload>() -> Result<()> {
    let args = BenchArgs::from_env()?;
    let record = run::<W>(&args)?;
    let stdout = io::stdout();
    emit(&record, &mut stdout.lock())
}

/// Entry point shared by the workload binaries.
pub fn main_for<W: Workload>() -> ExitCode {
    init_logging();
    match try_main::<W>() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                BenchError::Usage { .. } | BenchError::InvalidSize { .. } => {
                    warn!(workload = W::NAME, %err, "not running");
                }
                BenchError::Allocation { .. }
                | BenchError::Output(_)
                | BenchError::Serialize(_) => {
                    error!(workload = W::NAME, %err, "record not emitted");
                }
            }
            ExitCode::from(&err)
        }
    }
}
