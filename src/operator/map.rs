use std::panic::{self, AssertUnwindSafe};

use crate::operator::error::TransformError;
use crate::source::{Sink, Source};

impl<V, F> Source<V, F>
where
    V: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + From<TransformError> + 'static,
{
    /// Derive a source that re-emits every value through `transform`.
    ///
    /// `Failure` and `Completed` are forwarded unchanged. If `transform`
    /// panics, the derived source terminates with a wrapped
    /// [`TransformError`]; the upstream source keeps emitting to its other
    /// subscribers.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let celsius: Source<i32, TransformError> = Source::new();
    /// let fahrenheit = celsius.map(|c| c * 9 / 5 + 32);
    /// ```
    pub fn map<VOut, T>(&self, transform: T) -> Source<VOut, F>
    where
        VOut: Clone + Send + Sync + 'static,
        T: Fn(V) -> VOut + Send + Sync + 'static,
    {
        let derived = Source::new();

        let on_value = derived.clone();
        let on_failure = derived.clone();
        let on_completed = derived.clone();
        let subscription = self.subscribe(Sink::new(
            move |value| match panic::catch_unwind(AssertUnwindSafe(|| transform(value))) {
                Ok(mapped) => on_value.send(mapped),
                Err(payload) => on_value.fail(F::from(TransformError::from_panic(payload.as_ref()))),
            },
            move |failure| on_failure.fail(failure),
            move || on_completed.complete(),
        ));

        derived.hold_upstream(subscription);
        derived
    }
}
