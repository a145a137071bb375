/// Ticket identifying one asynchronous request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic counter that lets a component ignore responses to requests it
/// has already superseded.
///
/// Each new request calls [`RequestSequence::issue`]; when its response
/// arrives, it is applied only if [`RequestSequence::is_current`] still
/// holds for its ticket.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
