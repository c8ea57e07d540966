// Application Layer - Use Cases

pub mod capability_probe;
pub mod constants;

// Re-exports
pub use capability_probe::{CapabilityProbe, ProbeConfig};
