// Capability Probe use case
// open own source -> poll once for READABLE -> demand an exact event match
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use super::constants::{DEFAULT_POLL_TIMEOUT, MAX_POLL_TIMEOUT_MS, REQUESTED_EVENTS};
use crate::domain::{EventMask, PollRequest, ProbeVerdict};
use crate::error::{ProbeError, Result};
use crate::port::PollFacility;

/// Probe configuration
///
/// `source_path` is fixed by the binary at compile time; the remaining fields
/// default to the constants in `application::constants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub source_path: PathBuf,
    pub timeout: Duration,
    pub requested: EventMask,
}

impl ProbeConfig {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            timeout: DEFAULT_POLL_TIMEOUT,
            requested: REQUESTED_EVENTS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject settings the poll primitive cannot express
    ///
    /// # Errors
    /// `ProbeError::Config` if the timeout overflows an `int` of milliseconds
    /// or nothing is requested
    pub fn validate(&self) -> Result<()> {
        if self.timeout.as_millis() > MAX_POLL_TIMEOUT_MS {
            return Err(ProbeError::Config(format!(
                "poll timeout {:?} exceeds {}ms",
                self.timeout, MAX_POLL_TIMEOUT_MS
            )));
        }
        if self.requested.is_empty() {
            return Err(ProbeError::Config("no events requested".to_string()));
        }
        Ok(())
    }
}

/// Readiness-poll capability probe
///
/// Linear, single-shot: every failure ends the run immediately.
pub struct CapabilityProbe<F: PollFacility> {
    facility: F,
    config: ProbeConfig,
}

impl<F: PollFacility> CapabilityProbe<F> {
    /// Create a probe over `facility`
    ///
    /// # Errors
    /// `ProbeError::Config` if `config` fails validation
    ///
    /// # Example
    /// ```text
    /// let probe = CapabilityProbe::new(NixPollFacility, ProbeConfig::new(PROBE_SOURCE))?;
    /// std::process::exit(probe.run().exit_status().into());
    /// ```
    pub fn new(facility: F, config: ProbeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { facility, config })
    }

    pub fn facility(&self) -> &F {
        &self.facility
    }

    /// Run the probe and fold the outcome into a verdict
    pub fn run(&self) -> ProbeVerdict {
        match self.check() {
            Ok(observed) => {
                debug!(observed = ?observed, "Poll facility looks genuine");
                ProbeVerdict::Usable
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), "Poll facility unusable");
                ProbeVerdict::Unusable(e.kind())
            }
        }
    }

    /// Run the probe sequence, returning the observed events on success
    ///
    /// # Errors
    /// - `ProbeError::Environment` if the source cannot be opened
    /// - `ProbeError::Facility` if poll returns its error sentinel
    /// - `ProbeError::SemanticMismatch` if the observed events are not
    ///   exactly the requested ones
    pub fn check(&self) -> Result<EventMask> {
        let path: &Path = &self.config.source_path;

        let handle = self
            .facility
            .open_readonly(path)
            .map_err(|source| ProbeError::Environment {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "Opened probe source");

        let mut requests = [PollRequest::new(handle, self.config.requested)];

        let ready = self
            .facility
            .poll(&mut requests, self.config.timeout)
            .map_err(ProbeError::Facility)?;

        let [request] = &requests;
        // A timeout leaves nothing observed
        let observed = request.observed().unwrap_or_else(EventMask::empty);

        debug!(
            ready = ready,
            requested = ?request.requested(),
            observed = ?observed,
            timeout_ms = self.config.timeout.as_millis() as u64,
            "Poll returned"
        );

        if !observed.is_exactly(request.requested()) {
            return Err(ProbeError::SemanticMismatch {
                requested: request.requested(),
                observed,
            });
        }

        Ok(observed)
    }
}
