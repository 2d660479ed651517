//! Scriptable sampler for tests.

use std::sync::{Arc, Mutex};

use crate::pal::{ResourceSampler, ResourceUsage};

/// Sampler whose counters are set by the test.
///
/// Clones share state, so a test can keep one handle and advance the
/// counters while a window holds the other.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeSampler {
    usage: Arc<Mutex<ResourceUsage>>,
}

impl FakeSampler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&self, usage: ResourceUsage) {
        *self
            .usage
            .lock()
            .expect("FakeSampler lock should not be poisoned") = usage;
    }
}

impl ResourceSampler for FakeSampler {
    fn sample(&self) -> ResourceUsage {
        *self
            .usage
            .lock()
            .expect("FakeSampler lock should not be poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_clones_share_state() {
        let a = FakeSampler::new();
        let b = a.clone();
        a.set(ResourceUsage {
            user_cpu: Duration::from_millis(5),
            ..Default::default()
        });
        assert_eq!(b.sample().user_cpu, Duration::from_millis(5));
    }
}
