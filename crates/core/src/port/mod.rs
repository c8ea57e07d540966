// Port Layer - Interfaces for external dependencies

pub mod poll_facility;

// Re-exports
pub use poll_facility::PollFacility;
