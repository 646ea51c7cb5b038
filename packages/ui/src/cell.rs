//! Somewhere async work writes its results: a signal in components, a mutex in
//! tests.

use std::sync::{Arc, Mutex, PoisonError};

use dioxus::prelude::*;

pub trait StateCell<T>: 'static {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }
}

impl<T: 'static> StateCell<T> for Arc<Mutex<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
