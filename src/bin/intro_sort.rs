use std::process::ExitCode;

use complexity_bench::benches::intro_sort::IntroSort;
use complexity_bench::runner;

fn main() -> ExitCode {
    runner::main_for::<IntroSort>()
}
