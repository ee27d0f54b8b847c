use barbershop::domain::event::ShopEvent;
use barbershop::domain::ports::ShopObserver;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Observer that records every floor event and lets a test block until an
/// expected event shows up.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    events: Mutex<Vec<ShopEvent>>,
    appended: Condvar,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in linearization order.
    pub fn events(&self) -> Vec<ShopEvent> {
        self.inner.events.lock().unwrap().clone()
    }

    /// Blocks until a recorded event matches `pred`; panics after `timeout`.
    pub fn wait_for(&self, timeout: Duration, pred: impl Fn(&ShopEvent) -> bool) {
        let deadline = Instant::now() + timeout;
        let mut events = self.inner.events.lock().unwrap();
        while !events.iter().any(&pred) {
            let now = Instant::now();
            assert!(now < deadline, "timed out waiting for a shop event");
            let (guard, _) = self
                .inner
                .appended
                .wait_timeout(events, deadline - now)
                .unwrap();
            events = guard;
        }
    }
}

impl ShopObserver for Recorder {
    fn notify(&self, event: ShopEvent) {
        self.inner.events.lock().unwrap().push(event);
        self.inner.appended.notify_all();
    }
}
