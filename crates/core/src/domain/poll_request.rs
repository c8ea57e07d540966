// Poll Request - one handle, one requested mask, one observed mask
use super::EventMask;

/// A single readiness-poll request
///
/// Owns its handle, so dropping the request closes the resource.
/// `observed` stays `None` until a poll call fills it in.
#[derive(Debug)]
pub struct PollRequest<H> {
    handle: H,
    requested: EventMask,
    observed: Option<EventMask>,
}

impl<H> PollRequest<H> {
    /// Create a request for `requested` events on an already-open handle
    pub fn new(handle: H, requested: EventMask) -> Self {
        Self {
            handle,
            requested,
            observed: None,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn requested(&self) -> EventMask {
        self.requested
    }

    /// Events reported by the last poll call, if any
    pub fn observed(&self) -> Option<EventMask> {
        self.observed
    }

    /// Record the events reported by the poll primitive
    pub fn set_observed(&mut self, events: EventMask) {
        self.observed = Some(events);
    }
}
