//! Single-shot workload benchmarks.
//!
//! Each binary in this crate runs one synthetic workload over a seeded
//! input and prints one JSON record with wall time, user/system CPU time,
//! peak RSS and the logical core count:
//!
//! ```text
//! $ intro-sort qs 1000 42
//! {"alg":"qs","n":1000,"seed":42,"wall_ms":0.041,"cpu_user_ms":0.000,"cpu_sys_ms":0.000,"rss_peak_mib":2.312,"threads":8}
//! ```
//!
//! Exit status 2 means fewer than three arguments; 3 means a size-checked
//! workload got `n <= 0`.

pub mod args;
pub mod benches;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod pal;
pub mod runner;
pub mod schema;

pub use args::BenchArgs;
pub use benches::{SizePolicy, Workload};
pub use error::{BenchError, Result};
pub use harness::{measure, MeasurementWindow};
pub use pal::{OsSampler, ResourceSampler, ResourceUsage};
pub use schema::BenchRecord;
