use super::Event;

/// Receiver of interaction and lifecycle events.
///
/// Implemented for crossbeam senders and for closures, so a host can either
/// drain a channel on its own schedule or react inline.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // a dropped receiver only means nobody listens anymore
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

impl<F: Fn(Event)> EventSink for F {
    fn send(&self, event: Event) {
        self(event);
    }
}
