// Readiness event mask (platform-neutral)
use bitflags::bitflags;

bitflags! {
    /// Set of readiness conditions requested from or reported by a poll call
    ///
    /// Mirrors the conventional `poll(2)` conditions without tying the core
    /// to any libc. `UNRECOGNIZED` is set by adapters for native bits that
    /// have no counterpart here, so foreign bits always survive translation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventMask: u16 {
        /// Data other than high-priority data may be read (POLLIN)
        const READABLE = 1 << 0;
        /// High-priority data may be read (POLLPRI)
        const PRIORITY = 1 << 1;
        /// Normal data may be written (POLLOUT)
        const WRITABLE = 1 << 2;
        /// Normal data may be read (POLLRDNORM)
        const READ_NORMAL = 1 << 3;
        /// Priority-band data may be read (POLLRDBAND)
        const READ_BAND = 1 << 4;
        /// Normal data may be written (POLLWRNORM)
        const WRITE_NORMAL = 1 << 5;
        /// Priority-band data may be written (POLLWRBAND)
        const WRITE_BAND = 1 << 6;
        /// An error has occurred (POLLERR)
        const ERROR = 1 << 7;
        /// Device has been disconnected (POLLHUP)
        const HANGUP = 1 << 8;
        /// Handle is not open (POLLNVAL)
        const INVALID = 1 << 9;
        /// Native bit(s) with no mapping
        const UNRECOGNIZED = 1 << 15;
    }
}

impl EventMask {
    /// True only if `self` is exactly `expected`: no extra bits, none missing
    pub fn is_exactly(self, expected: EventMask) -> bool {
        self == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(EventMask::READABLE.is_exactly(EventMask::READABLE));
        assert!(!(EventMask::READABLE | EventMask::HANGUP).is_exactly(EventMask::READABLE));
        assert!(!EventMask::empty().is_exactly(EventMask::READABLE));
        assert!(!EventMask::WRITABLE.is_exactly(EventMask::READABLE));
    }

    #[test]
    fn test_contains_is_not_exact() {
        // A "readable bit is set" check would accept this; exact match must not
        let observed = EventMask::READABLE | EventMask::READ_NORMAL;
        assert!(observed.contains(EventMask::READABLE));
        assert!(!observed.is_exactly(EventMask::READABLE));
    }
}
