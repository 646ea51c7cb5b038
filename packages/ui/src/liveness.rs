//! Per-view liveness token.
//!
//! A view creates one [`Liveness`] when it mounts and ends it when it unmounts.
//! Request results that arrive after that are dropped instead of being written
//! into state nobody renders anymore.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// `Some(value)` while the view is alive, `None` once it has ended.
    pub fn keep<T>(&self, value: T) -> Option<T> {
        self.is_alive().then_some(value)
    }
}

/// A [`Liveness`] tied to the calling component's lifetime.
pub fn use_liveness() -> Liveness {
    let liveness = use_hook(Liveness::new);
    let on_drop = liveness.clone();
    use_drop(move || on_drop.end());
    liveness
}
