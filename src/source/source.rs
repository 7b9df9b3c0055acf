use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use log::{debug, trace};

use crate::event::Event;
use crate::source::observer::Observer;
use crate::source::subscription::Subscription;

/// A typed event emitter with zero or more registered observers.
///
/// Events are delivered synchronously on the emitting thread, in registration
/// order, and every callback completes before [`emit`](Source::emit) returns.
/// A terminal event ([`Event::Failure`] or [`Event::Completed`]) ends the
/// stream: all registrations are cleared afterwards and later emits are
/// no-ops, while later subscribers receive the terminal event immediately.
///
/// Cloning a source is cheap and yields another handle to the same stream.
///
/// # Examples
///
/// ```
/// use partyline::{Sink, Source};
///
/// let source: Source<u32, String> = Source::new();
/// let subscription = source.subscribe(Sink::values(|value| println!("got {value}")));
///
/// source.send(7);
/// source.complete();
/// # drop(subscription);
/// ```
pub struct Source<V, F> {
    inner: Arc<RwLock<SourceInner<V, F>>>,
    // Subscriptions feeding this source; operators park their upstream
    // registration here so the chain lives exactly as long as this source.
    upstream: Arc<Mutex<Vec<Subscription>>>,
}

struct Registration<V, F> {
    id: usize,
    observer: Arc<dyn Observer<V, F>>,
    cancelled: Arc<AtomicBool>,
}

struct SourceInner<V, F> {
    registrations: Vec<Registration<V, F>>,
    terminal: Option<Event<V, F>>,
    next_id: usize,
}

impl<V, F> Source<V, F>
where
    V: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
    /// Create a new source with no observers.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SourceInner {
                registrations: Vec::new(),
                terminal: None,
                next_id: 0,
            })),
            upstream: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an observer and return its cancellation handle.
    ///
    /// The observer receives every event emitted after registration, in
    /// emission order, until the handle is cancelled or the stream ends.
    /// Subscribing after a terminal event delivers that event to the observer
    /// right away and returns an already-cancelled handle.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<V, F> + 'static,
    {
        let observer: Arc<dyn Observer<V, F>> = Arc::new(observer);

        let replay = {
            let mut inner = self.inner.write().unwrap();
            match inner.terminal.clone() {
                Some(event) => event,
                None => {
                    let id = inner.next_id;
                    inner.next_id += 1;
                    let cancelled = Arc::new(AtomicBool::new(false));
                    inner.registrations.push(Registration {
                        id,
                        observer,
                        cancelled: Arc::clone(&cancelled),
                    });
                    trace!("observer {id} registered");

                    let weak = Arc::downgrade(&self.inner);
                    return Subscription::active(cancelled, move || {
                        if let Some(inner) = weak.upgrade() {
                            inner
                                .write()
                                .unwrap()
                                .registrations
                                .retain(|registration| registration.id != id);
                        }
                    });
                }
            }
        };

        debug!("post-terminal subscribe, replaying terminal event");
        deliver(observer.as_ref(), &replay);
        Subscription::spent()
    }

    /// Deliver an event to every registered observer, in registration order.
    ///
    /// Runs on the caller's thread; all callbacks complete before this
    /// returns. Emitting after a terminal event is a no-op. Callbacks may
    /// subscribe or cancel reentrantly: delivery iterates a snapshot of the
    /// registration list, skipping entries cancelled mid-pass, and a
    /// subscription added mid-pass first sees the next event.
    pub fn emit(&self, event: Event<V, F>) {
        let pass = {
            let mut inner = self.inner.write().unwrap();
            if inner.terminal.is_some() {
                return;
            }
            if event.is_terminal() {
                inner.terminal = Some(event.clone());
                debug!("stream terminated, {} observer(s)", inner.registrations.len());
            }
            inner
                .registrations
                .iter()
                .map(|registration| {
                    (
                        Arc::clone(&registration.observer),
                        Arc::clone(&registration.cancelled),
                    )
                })
                .collect::<Vec<_>>()
        };

        for (observer, cancelled) in &pass {
            if cancelled.load(Ordering::SeqCst) {
                continue;
            }
            deliver(observer.as_ref(), &event);
        }

        if event.is_terminal() {
            let mut inner = self.inner.write().unwrap();
            for registration in &inner.registrations {
                registration.cancelled.store(true, Ordering::SeqCst);
            }
            inner.registrations.clear();
        }
    }

    /// Emit a `Value` event.
    pub fn send(&self, value: V) {
        self.emit(Event::Value(value));
    }

    /// Terminate the stream with a failure.
    pub fn fail(&self, failure: F) {
        self.emit(Event::Failure(failure));
    }

    /// Terminate the stream successfully.
    pub fn complete(&self) {
        self.emit(Event::Completed);
    }

    /// Whether a terminal event has been emitted.
    pub fn is_terminated(&self) -> bool {
        self.inner.read().unwrap().terminal.is_some()
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.inner.read().unwrap().registrations.len()
    }

    /// Park an upstream subscription so it is released together with this
    /// source. Operators use this to keep their input wired.
    pub(crate) fn hold_upstream(&self, subscription: Subscription) {
        self.upstream.lock().unwrap().push(subscription);
    }
}

fn deliver<V: Clone, F: Clone>(observer: &dyn Observer<V, F>, event: &Event<V, F>) {
    match event {
        Event::Value(value) => observer.on_value(value.clone()),
        Event::Failure(failure) => observer.on_failure(failure.clone()),
        Event::Completed => observer.on_completed(),
    }
}

impl<V, F> Default for Source<V, F>
where
    V: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F> Clone for Source<V, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            upstream: Arc::clone(&self.upstream),
        }
    }
}
