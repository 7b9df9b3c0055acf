type ValueFn<V> = Box<dyn Fn(V) + Send + Sync>;
type FailureFn<F> = Box<dyn Fn(F) + Send + Sync>;
type CompletedFn = Box<dyn Fn() + Send + Sync>;

/// Capability interface for consuming a source's events.
///
/// A source calls exactly one of these methods per delivered event. After
/// `on_failure` or `on_completed`, the subscription is spent and no further
/// calls are made on it.
pub trait Observer<V, F>: Send + Sync {
    /// Called for each `Value` event.
    fn on_value(&self, value: V);

    /// Called once if the stream ends with a failure.
    fn on_failure(&self, failure: F);

    /// Called once if the stream ends successfully.
    fn on_completed(&self);
}

/// A closure-backed [`Observer`].
///
/// # Example
///
/// ```ignore
/// let observer = Sink::new(
///     |value| println!("value: {value}"),
///     |failure| eprintln!("failed: {failure}"),
///     || println!("done"),
/// );
/// source.subscribe(observer);
/// ```
pub struct Sink<V, F> {
    on_value: ValueFn<V>,
    on_failure: FailureFn<F>,
    on_completed: CompletedFn,
}

impl<V, F> Sink<V, F> {
    /// Build an observer from one closure per event kind.
    pub fn new(
        on_value: impl Fn(V) + Send + Sync + 'static,
        on_failure: impl Fn(F) + Send + Sync + 'static,
        on_completed: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_value: Box::new(on_value),
            on_failure: Box::new(on_failure),
            on_completed: Box::new(on_completed),
        }
    }

    /// Build an observer that only reacts to values, ignoring termination.
    pub fn values(on_value: impl Fn(V) + Send + Sync + 'static) -> Self {
        Self::new(on_value, |_| {}, || {})
    }
}

impl<V, F> Observer<V, F> for Sink<V, F> {
    fn on_value(&self, value: V) {
        (self.on_value)(value);
    }

    fn on_failure(&self, failure: F) {
        (self.on_failure)(failure);
    }

    fn on_completed(&self) {
        (self.on_completed)();
    }
}
