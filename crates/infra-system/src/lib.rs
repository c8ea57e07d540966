// have-poll Infrastructure - System Adapters
// Implements: PollFacility over poll(2)

#[cfg(unix)]
pub mod nix_poll_facility;

#[cfg(unix)]
pub use nix_poll_facility::NixPollFacility;
