use super::event::ShopEvent;

/// Sink for shop floor events.
///
/// `notify` is called with the shop lock held, so implementations must be
/// quick and must not call back into the shop.
pub trait ShopObserver: Send + Sync {
    fn notify(&self, event: ShopEvent);
}

pub type ShopObserverBox = Box<dyn ShopObserver>;

/// Observer that discards every event.
pub struct NoopObserver;

impl ShopObserver for NoopObserver {
    fn notify(&self, _event: ShopEvent) {}
}
