use std::panic::{self, AssertUnwindSafe};

use crate::operator::error::TransformError;
use crate::source::{Sink, Source};

impl<V, F> Source<V, F>
where
    V: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + From<TransformError> + 'static,
{
    /// Derive a source that forwards only values satisfying `predicate`.
    ///
    /// Rejected values are dropped silently; the stream continues. `Failure`
    /// and `Completed` are forwarded unchanged. A panicking predicate is
    /// handled like a panicking transform: the derived source terminates with
    /// a wrapped [`TransformError`].
    pub fn filter<P>(&self, predicate: P) -> Source<V, F>
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let derived = Source::new();

        let on_value = derived.clone();
        let on_failure = derived.clone();
        let on_completed = derived.clone();
        let subscription = self.subscribe(Sink::new(
            move |value: V| match panic::catch_unwind(AssertUnwindSafe(|| predicate(&value))) {
                Ok(true) => on_value.send(value),
                Ok(false) => {}
                Err(payload) => on_value.fail(F::from(TransformError::from_panic(payload.as_ref()))),
            },
            move |failure| on_failure.fail(failure),
            move || on_completed.complete(),
        ));

        derived.hold_upstream(subscription);
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn drops_rejected_values_and_continues() {
        let source: Source<i32, TransformError> = Source::new();
        let evens = source.filter(|value| value % 2 == 0);

        let values = Arc::new(Mutex::new(Vec::new()));
        let completed = Arc::new(Mutex::new(false));
        let values_clone = Arc::clone(&values);
        let completed_clone = Arc::clone(&completed);
        let subscription = evens.subscribe(Sink::new(
            move |value| values_clone.lock().unwrap().push(value),
            |_: TransformError| {},
            move || *completed_clone.lock().unwrap() = true,
        ));

        for value in 1..=6 {
            source.send(value);
        }
        source.complete();

        assert_eq!(*values.lock().unwrap(), vec![2, 4, 6]);
        assert!(*completed.lock().unwrap());
        drop(subscription);
    }

    #[test]
    fn panicking_predicate_terminates_derived_source() {
        let source: Source<i32, TransformError> = Source::new();
        let filtered = source.filter(|value| {
            if *value < 0 {
                panic!("negative input");
            }
            true
        });

        let failures = Arc::new(Mutex::new(Vec::new()));
        let failures_clone = Arc::clone(&failures);
        let subscription = filtered.subscribe(Sink::new(
            |_| {},
            move |failure: TransformError| failures_clone.lock().unwrap().push(failure),
            || {},
        ));

        source.send(1);
        source.send(-1);
        source.send(2);

        let failures = failures.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message(), "negative input");
        assert!(filtered.is_terminated());
        assert!(!source.is_terminated());
        drop(subscription);
    }
}
