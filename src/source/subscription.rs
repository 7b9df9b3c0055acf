use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::trace;

type RemoveFn = Box<dyn Fn() + Send + Sync>;

/// A cancellable registration of an observer on a source.
///
/// Dropping the handle cancels the registration, mirroring scope-based
/// cleanup; call [`detach`](Subscription::detach) to keep the observer
/// registered for the source's remaining lifetime instead.
///
/// The handle holds only a weak reference back into its source, so keeping a
/// subscription alive never keeps the source alive.
pub struct Subscription {
    cancelled: Arc<AtomicBool>,
    remove: Option<RemoveFn>,
    armed: bool,
}

impl Subscription {
    /// Handle for a live registration. `remove` unlinks the registration
    /// from its source; the flag is shared with the source's delivery loop.
    pub(crate) fn active(
        cancelled: Arc<AtomicBool>,
        remove: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            cancelled,
            remove: Some(Box::new(remove)),
            armed: true,
        }
    }

    /// Handle for a registration that was never live, e.g. a subscribe after
    /// the source already terminated.
    pub(crate) fn spent() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(true)),
            remove: None,
            armed: false,
        }
    }

    /// Cancel the registration.
    ///
    /// Idempotent: cancelling twice, or cancelling after the source has
    /// terminated, is a no-op. Safe to call from inside an observer callback
    /// triggered by the same emission; the observer receives nothing further.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(remove) = &self.remove {
            remove();
        }
        trace!("subscription cancelled");
    }

    /// Whether this subscription has been cancelled or spent.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Consume the handle without cancelling, leaving the observer registered
    /// until the source terminates or is dropped.
    pub fn detach(mut self) {
        self.armed = false;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.armed {
            self.cancel();
        }
    }
}
