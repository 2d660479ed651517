use std::process::ExitCode;

use complexity_bench::benches::linear_scan::LinearScan;
use complexity_bench::runner;

fn main() -> ExitCode {
    runner::main_for::<LinearScan>()
}
