//! Platform abstraction for process resource counters.
//!
//! The harness only sees [`ResourceSampler`]; which implementation backs
//! [`OsSampler`] is decided at build time from the target.

mod abstractions;
#[cfg(test)]
mod fake;
#[cfg(not(any(unix, windows)))]
mod fallback;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod win32;

pub use abstractions::{ResourceSampler, ResourceUsage};
#[cfg(test)]
pub(crate) use fake::FakeSampler;
#[cfg(not(any(unix, windows)))]
pub use fallback::OsSampler;
#[cfg(unix)]
pub use unix::OsSampler;
#[cfg(windows)]
pub use win32::OsSampler;
