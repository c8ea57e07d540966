// have-poll Core - Domain Logic & Ports
// NO infrastructure dependencies (poll(2) lives behind port::PollFacility)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{ProbeError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
