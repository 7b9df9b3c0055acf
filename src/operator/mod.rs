//! Derived sources.
//!
//! An operator wraps an upstream [`Source`](crate::Source), transforms or
//! filters each value, and re-emits on a source of its own. Terminal events
//! pass through unchanged. A panicking transform or predicate terminates the
//! derived stream with a [`TransformError`] wrapped into its failure type;
//! the upstream source and its other subscribers are unaffected.

mod error;
mod filter;
mod map;

pub use error::TransformError;
