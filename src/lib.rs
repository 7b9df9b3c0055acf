//! # Partyline
//!
//! A minimal typed event-stream core for Rust.
//!
//! Partyline models push-based streams with three pieces:
//!
//! ## Sources and observers
//!
//! - [`Source<V, F>`] - emits typed values, a typed failure, or completion to
//!   every registered observer, synchronously and in registration order
//! - [`Observer`] - the capability trait consumers implement
//!   (`on_value` / `on_failure` / `on_completed`); [`Sink`] adapts closures
//! - [`Subscription`] - cancellable registration handle, cancelled on drop
//!
//! ## Operators
//!
//! - [`Source::map`] - transform each value on a derived source
//! - [`Source::filter`] - forward only values matching a predicate
//!
//! Terminal events tear the stream down: registrations are cleared, later
//! emits are no-ops, and late subscribers receive the terminal event
//! immediately. A panicking operator closure terminates only the derived
//! stream, as a [`TransformError`] wrapped into its failure type.
//!
//! ## Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use partyline::{Sink, Source};
//!
//! let source: Source<i32, String> = Source::new();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink_seen = Arc::clone(&seen);
//! let subscription = source.subscribe(Sink::values(move |value| {
//!     sink_seen.lock().unwrap().push(value);
//! }));
//!
//! source.send(1);
//! source.send(2);
//! source.complete();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! assert!(subscription.is_cancelled());
//! ```

pub mod event;
pub mod operator;
pub mod source;

// Re-export main types for convenience
pub use event::Event;
pub use operator::TransformError;
pub use source::{Observer, Sink, Source, Subscription};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    #[test]
    fn it_works() {
        // Basic smoke test
        let source: Source<i32, String> = Source::new();
        let last = Arc::new(AtomicI32::new(0));

        let last_clone = last.clone();
        let subscription = source.subscribe(Sink::values(move |value| {
            last_clone.store(value, Ordering::SeqCst);
        }));

        source.send(42);
        assert_eq!(last.load(Ordering::SeqCst), 42);
        drop(subscription);
    }
}
