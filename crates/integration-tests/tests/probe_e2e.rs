// End-to-end: CapabilityProbe over the real poll(2) adapter
#![cfg(unix)]

use std::path::PathBuf;

use havepoll_core::application::{CapabilityProbe, ProbeConfig};
use havepoll_core::domain::{EventMask, FailureKind, ProbeVerdict};
use havepoll_core::ProbeError;
use havepoll_infra_system::NixPollFacility;

fn this_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/probe_e2e.rs")
}

fn probe_for(path: PathBuf) -> CapabilityProbe<NixPollFacility> {
    CapabilityProbe::new(NixPollFacility::new(), ProbeConfig::new(path)).unwrap()
}

#[test]
fn test_own_source_is_exactly_readable() {
    let probe = probe_for(this_file());

    assert_eq!(probe.check().unwrap(), EventMask::READABLE);
    assert_eq!(probe.run(), ProbeVerdict::Usable);
    assert_eq!(probe.run().exit_status(), 0);
}

#[test]
fn test_missing_source_is_environment_error() {
    let probe = probe_for(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/deleted.rs"));

    match probe.check() {
        Err(ProbeError::Environment { path, source }) => {
            assert!(path.ends_with("tests/deleted.rs"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected environment error, got {:?}", other),
    }
    assert_eq!(probe.run(), ProbeVerdict::Unusable(FailureKind::Environment));
    assert_eq!(probe.run().exit_status(), 1);
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let probe = probe_for(this_file());
    let verdicts: Vec<ProbeVerdict> = (0..10).map(|_| probe.run()).collect();
    assert!(verdicts.iter().all(|v| *v == ProbeVerdict::Usable));
}
