// Poll Facility Port
// Abstraction over "open a file read-only" + "poll handles for readiness"

use std::io;
use std::path::Path;
use std::time::Duration;

use crate::domain::PollRequest;

/// Readiness-polling facility
///
/// Implementations:
/// - NixPollFacility (infra-system): std::fs::File + poll(2) via nix
/// - mocks::MockPollFacility: scripted behaviour for tests
pub trait PollFacility {
    /// Opaque open resource usable with `poll`
    type Handle;

    /// Open `path` for read-only access
    ///
    /// # Errors
    /// Any I/O error from the underlying open call
    fn open_readonly(&self, path: &Path) -> io::Result<Self::Handle>;

    /// Wait up to `timeout` for any request to become ready
    ///
    /// On success fills in `observed` for every request and returns the
    /// number of requests with non-empty observed events (0 on timeout).
    ///
    /// # Errors
    /// The primitive's error sentinel, as an `io::Error`
    fn poll(
        &self,
        requests: &mut [PollRequest<Self::Handle>],
        timeout: Duration,
    ) -> io::Result<usize>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::EventMask;
    use std::sync::{Arc, Mutex};

    /// Mock poll behaviour
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Poll succeeds and reports exactly these events
        Report(EventMask),
        /// Poll returns the error sentinel with this errno
        Fail(i32),
        /// Poll times out without reporting anything
        Timeout,
    }

    /// Handle returned by the mock
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockHandle;

    /// Mock PollFacility for testing
    pub struct MockPollFacility {
        behavior: Arc<Mutex<MockBehavior>>,
        open_error: Option<io::ErrorKind>,
        open_count: Arc<Mutex<usize>>,
        poll_count: Arc<Mutex<usize>>,
        last_timeout: Arc<Mutex<Option<Duration>>>,
    }

    impl MockPollFacility {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                open_error: None,
                open_count: Arc::new(Mutex::new(0)),
                poll_count: Arc::new(Mutex::new(0)),
                last_timeout: Arc::new(Mutex::new(None)),
            }
        }
        /// Behaves like a faithful poll(2) on a regular file
        pub fn new_genuine() -> Self {
            Self::new(MockBehavior::Report(EventMask::READABLE))
        }
        pub fn new_reporting(events: EventMask) -> Self {
            Self::new(MockBehavior::Report(events))
        }
        pub fn new_failing(errno: i32) -> Self {
            Self::new(MockBehavior::Fail(errno))
        }
        /// Make every open fail with `kind`
        pub fn with_open_error(mut self, kind: io::ErrorKind) -> Self {
            self.open_error = Some(kind);
            self
        }
        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }
        pub fn open_count(&self) -> usize {
            *self.open_count.lock().unwrap()
        }
        pub fn poll_count(&self) -> usize {
            *self.poll_count.lock().unwrap()
        }
        pub fn last_timeout(&self) -> Option<Duration> {
            *self.last_timeout.lock().unwrap()
        }
    }

    impl PollFacility for MockPollFacility {
        type Handle = MockHandle;

        fn open_readonly(&self, _path: &Path) -> io::Result<MockHandle> {
            *self.open_count.lock().unwrap() += 1;
            match self.open_error {
                Some(kind) => Err(io::Error::from(kind)),
                None => Ok(MockHandle),
            }
        }

        fn poll(
            &self,
            requests: &mut [PollRequest<MockHandle>],
            timeout: Duration,
        ) -> io::Result<usize> {
            *self.poll_count.lock().unwrap() += 1;
            *self.last_timeout.lock().unwrap() = Some(timeout);

            let behavior = self.behavior.lock().unwrap().clone();
            match behavior {
                MockBehavior::Report(events) => {
                    for request in requests.iter_mut() {
                        request.set_observed(events);
                    }
                    Ok(if events.is_empty() { 0 } else { requests.len() })
                }
                MockBehavior::Fail(errno) => Err(io::Error::from_raw_os_error(errno)),
                MockBehavior::Timeout => {
                    for request in requests.iter_mut() {
                        request.set_observed(EventMask::empty());
                    }
                    Ok(0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{MockHandle, MockPollFacility};
    use super::*;
    use crate::domain::EventMask;

    #[test]
    fn test_mock_fills_every_request() {
        let facility = MockPollFacility::new_reporting(EventMask::READABLE);
        let handle = facility.open_readonly(Path::new("ignored.rs")).unwrap();
        assert_eq!(handle, MockHandle);

        let mut requests = [PollRequest::new(handle, EventMask::READABLE)];
        let ready = facility
            .poll(&mut requests, Duration::from_millis(10))
            .unwrap();

        assert_eq!(ready, 1);
        assert_eq!(requests[0].observed(), Some(EventMask::READABLE));
        assert_eq!(facility.open_count(), 1);
        assert_eq!(facility.poll_count(), 1);
    }
}
