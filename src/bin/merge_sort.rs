use std::process::ExitCode;

use complexity_bench::benches::merge_sort::MergeSort;
use complexity_bench::runner;

fn main() -> ExitCode {
    runner::main_for::<MergeSort>()
}
