use std::process::ExitCode;

use complexity_bench::benches::log_halving::LogHalving;
use complexity_bench::runner;

fn main() -> ExitCode {
    runner::main_for::<LogHalving>()
}
