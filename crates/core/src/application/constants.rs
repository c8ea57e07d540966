// Probe constants (no magic values)
use std::time::Duration;

use crate::domain::EventMask;

/// Poll timeout (10ms, the poll(2) millisecond convention)
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Events requested from the facility; the observed set must match exactly
pub const REQUESTED_EVENTS: EventMask = EventMask::READABLE;

/// Largest timeout the primitive's `int` millisecond argument can express
pub const MAX_POLL_TIMEOUT_MS: u128 = i32::MAX as u128;
