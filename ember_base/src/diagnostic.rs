//! A module for collecting and reporting diagnostics in the front-end.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use derive_more::{Deref, DerefMut};

/// Represents a trait responsible for handling diagnostics in the front-end.
///
/// The lexer and the parser never abort on a malformed construct; they report
/// it to a [`Handler`] and continue on a best-effort basis. What happens to
/// the reported diagnostics is up to the implementor: they can be stored,
/// printed, counted, or ignored.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, error: T);
}

/// Is a struct that implements [`Handler`] trait by storing all diagnostics
/// in a vector, in the order they were received.
#[derive(Debug, Deref, DerefMut)]
pub struct Storage<T: Send + Sync> {
    errors: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the underlying vector of diagnostics.
    pub fn into_vec(self) -> Vec<T> { self.errors.into_inner().unwrap() }

    /// Returns a reference to the underlying vector of diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.errors.read().unwrap() }

    /// Returns a mutable reference to the underlying vector of diagnostics.
    pub fn as_vec_mut(&self) -> RwLockWriteGuard<Vec<T>> { self.errors.write().unwrap() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, error: U) { self.errors.write().unwrap().push(error.into()); }
}

/// Is a struct that implements [`Handler`] trait by discarding every
/// diagnostic it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dummy;

impl<T> Handler<T> for Dummy {
    fn receive(&self, _error: T) {}
}
