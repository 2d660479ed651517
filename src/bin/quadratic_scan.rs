use std::process::ExitCode;

use complexity_bench::benches::quadratic_scan::QuadraticScan;
use complexity_bench::runner;

fn main() -> ExitCode {
    runner::main_for::<QuadraticScan>()
}
