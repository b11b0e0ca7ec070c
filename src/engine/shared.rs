//! Lock-serialized engine handle for multi-threaded hosts.
//!
//! The engine itself is single-threaded. `SharedEngine` wraps it in one
//! exclusive lock so that every read observes all mutations committed before
//! it, in lock order.

use std::sync::{Arc, Mutex, PoisonError};

use crate::engine::regression::RegressionEngine;
use crate::math::sums::SumsLinalg;

/// Cloneable handle to an engine behind a single mutex.
pub struct SharedEngine<T: SumsLinalg> {
    inner: Arc<Mutex<RegressionEngine<T>>>,
}

impl<T: SumsLinalg> Clone for SharedEngine<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: SumsLinalg> SharedEngine<T> {
    /// Wrap an engine.
    pub fn new(engine: RegressionEngine<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with shared access under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&RegressionEngine<T>) -> R) -> R {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive access under the lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut RegressionEngine<T>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl<T: SumsLinalg> From<RegressionEngine<T>> for SharedEngine<T> {
    fn from(engine: RegressionEngine<T>) -> Self {
        Self::new(engine)
    }
}
