use crate::pal::{ResourceSampler, ResourceUsage};

/// Sampler for targets without a supported resource API; reports zeros.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSampler;

impl ResourceSampler for OsSampler {
    fn sample(&self) -> ResourceUsage {
        ResourceUsage::default()
    }
}
