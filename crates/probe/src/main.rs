//! have-poll - readiness-poll capability probe
//!
//! Opens its own source file, polls it once for READABLE and exits 0 only if
//! the host reports exactly READABLE. Any other outcome exits 1.

mod logging;

use std::process::ExitCode;

use tracing::{debug, warn};

use havepoll_core::domain::ProbeVerdict;

/// The probe's own source, at the path it was compiled from
const PROBE_SOURCE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/main.rs");

fn main() -> ExitCode {
    // Best effort: a broken logger must not change the verdict
    if let Err(e) = logging::init_logging() {
        eprintln!("have-poll: logging disabled: {e:#}");
    }

    debug!(
        version = havepoll_core::VERSION,
        source = PROBE_SOURCE,
        "have-poll starting"
    );

    let verdict = probe_verdict();
    debug!(verdict = ?verdict, "have-poll finished");

    ExitCode::from(verdict.exit_status())
}

#[cfg(unix)]
fn probe_verdict() -> ProbeVerdict {
    use havepoll_core::application::{CapabilityProbe, ProbeConfig};
    use havepoll_infra_system::NixPollFacility;

    match CapabilityProbe::new(NixPollFacility::new(), ProbeConfig::new(PROBE_SOURCE)) {
        Ok(probe) => probe.run(),
        Err(e) => {
            warn!(error = %e, "Invalid probe configuration");
            ProbeVerdict::Unusable(e.kind())
        }
    }
}

#[cfg(not(unix))]
fn probe_verdict() -> ProbeVerdict {
    use havepoll_core::domain::FailureKind;

    warn!("poll(2) is not available on this platform");
    ProbeVerdict::Unusable(FailureKind::Facility)
}
