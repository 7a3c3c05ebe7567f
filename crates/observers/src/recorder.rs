use std::{cell::RefCell, fmt, rc::Rc};

use wand_core::End;

/// An end that keeps every value it receives.
///
/// Clones of a `Recorder` share the same storage, so one clone can be moved
/// into a pipeline while another is kept to read the results back.
///
/// # Example
///
/// ```rust
/// use wand_core::{Action, process_fn, start_fn};
/// use wand_observers::Recorder;
///
/// let recorder = Recorder::new();
/// let pipeline = start_fn(|| 10) | process_fn(|x: i32| x * 3) | recorder.clone();
///
/// pipeline.run();
/// assert_eq!(recorder.values(), vec![30]);
/// ```
pub struct Recorder<T> {
    values: Rc<RefCell<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns the number of values received so far.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    /// Returns `true` if no value has been received.
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// Removes and returns every value received so far.
    pub fn take(&self) -> Vec<T> {
        self.values.take()
    }

    /// Returns a copy of every value received so far, oldest first.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.borrow().clone()
    }

    /// Returns a copy of the most recent value.
    pub fn last(&self) -> Option<T>
    where
        T: Clone,
    {
        self.values.borrow().last().cloned()
    }
}

impl<T> End for Recorder<T> {
    type Input = T;

    fn end(&self, input: T) {
        self.values.borrow_mut().push(input);
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            values: Rc::clone(&self.values),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Recorder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("values", &self.values.borrow())
            .finish()
    }
}
