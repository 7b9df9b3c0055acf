//! Event sources and observer registration.
//!
//! This module provides the emitting side of a stream:
//! - Sources: typed event emitters with ordered observer lists
//! - Observers: the capability interface consumers implement
//! - Subscriptions: cancellable registration handles

mod observer;
mod source;
mod subscription;

pub use observer::{Observer, Sink};
pub use source::Source;
pub use subscription::Subscription;
