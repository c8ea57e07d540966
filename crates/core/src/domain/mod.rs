// Domain Layer - Poll request record, event masks and verdicts

pub mod event_mask;
pub mod poll_request;
pub mod verdict;

// Re-exports
pub use event_mask::EventMask;
pub use poll_request::PollRequest;
pub use verdict::{FailureKind, ProbeVerdict};
