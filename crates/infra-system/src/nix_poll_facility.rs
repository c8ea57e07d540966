// Poll facility implementation over poll(2)
// reason: nix gives safe PollFd/BorrowedFd wrappers, no raw libc calls
use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::AsFd;
use std::path::Path;
use std::time::Duration;

use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
use tracing::debug;

use havepoll_core::domain::{EventMask, PollRequest};
use havepoll_core::port::PollFacility;

/// One-to-one pairs between the neutral mask and native poll(2) flags
const FLAG_MAP: [(EventMask, PollFlags); 10] = [
    (EventMask::READABLE, PollFlags::POLLIN),
    (EventMask::PRIORITY, PollFlags::POLLPRI),
    (EventMask::WRITABLE, PollFlags::POLLOUT),
    (EventMask::READ_NORMAL, PollFlags::POLLRDNORM),
    (EventMask::READ_BAND, PollFlags::POLLRDBAND),
    (EventMask::WRITE_NORMAL, PollFlags::POLLWRNORM),
    (EventMask::WRITE_BAND, PollFlags::POLLWRBAND),
    (EventMask::ERROR, PollFlags::POLLERR),
    (EventMask::HANGUP, PollFlags::POLLHUP),
    (EventMask::INVALID, PollFlags::POLLNVAL),
];

/// Translate a requested mask into native flags
///
/// `UNRECOGNIZED` has no native counterpart and is dropped.
pub fn to_poll_flags(mask: EventMask) -> PollFlags {
    FLAG_MAP
        .iter()
        .filter(|(event, _)| mask.contains(*event))
        .fold(PollFlags::empty(), |acc, (_, flag)| acc | *flag)
}

/// Translate native flags back into the neutral mask
///
/// Native bits outside the map become `UNRECOGNIZED`.
pub fn from_poll_flags(flags: PollFlags) -> EventMask {
    let mut mask = EventMask::empty();
    let mut rest = flags;
    for (event, flag) in FLAG_MAP.iter() {
        if flags.contains(*flag) {
            mask |= *event;
            rest.remove(*flag);
        }
    }
    if !rest.is_empty() {
        mask |= EventMask::UNRECOGNIZED;
    }
    mask
}

/// Poll facility backed by the host's poll(2)
///
/// Handles are plain `File`s; dropping the request closes the descriptor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NixPollFacility;

impl NixPollFacility {
    pub fn new() -> Self {
        Self
    }
}

impl PollFacility for NixPollFacility {
    type Handle = File;

    fn open_readonly(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new().read(true).open(path)
    }

    fn poll(&self, requests: &mut [PollRequest<File>], timeout: Duration) -> io::Result<usize> {
        let millis = i32::try_from(timeout.as_millis()).map_err(|_| {
            io::Error::new(io::ErrorKind::InvalidInput, "poll timeout overflows int")
        })?;
        let timeout = PollTimeout::try_from(millis)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{e:?}")))?;

        // Collect native results first; PollFd borrows every handle
        let revents: Vec<EventMask> = {
            let mut fds: Vec<PollFd<'_>> = requests
                .iter()
                .map(|r| PollFd::new(r.handle().as_fd(), to_poll_flags(r.requested())))
                .collect();

            let ready = poll(&mut fds, timeout).map_err(io::Error::from)?;
            debug!(ready = ready, nfds = fds.len(), "poll(2) returned");

            fds.iter()
                .map(|fd| match fd.revents() {
                    Some(flags) => from_poll_flags(flags),
                    // nix could not parse the native bits at all
                    None => EventMask::UNRECOGNIZED,
                })
                .collect()
        };

        let mut ready = 0;
        for (request, events) in requests.iter_mut().zip(revents) {
            if !events.is_empty() {
                ready += 1;
            }
            request.set_observed(events);
        }
        Ok(ready)
    }
}
