use std::{fmt, marker::PhantomData};

use crate::Process;

/// A process that returns its input unchanged.
///
/// `Identity` is the neutral element of process composition: composing it
/// on either side of a process leaves the mapping as it was.
pub struct Identity<T> {
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    /// Creates a new identity process.
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

/// Creates an [`Identity`] process for `T`.
pub const fn identity<T>() -> Identity<T> {
    Identity::new()
}

impl<T> Process for Identity<T> {
    type Input = T;
    type Output = T;

    fn process(&self, input: T) -> T {
        input
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}
