use std::{fmt, marker::PhantomData};

use crate::{Action, End, Process, Start};

/// A [`Start`] backed by a closure.
///
/// Created with [`start_fn()`].
#[derive(Clone, Copy)]
pub struct StartFn<F> {
    function: F,
}

/// Wraps a niladic closure as a [`Start`].
pub fn start_fn<F, O>(function: F) -> StartFn<F>
where
    F: Fn() -> O,
{
    StartFn { function }
}

impl<F, O> Start for StartFn<F>
where
    F: Fn() -> O,
{
    type Output = O;

    fn start(&self) -> O {
        (self.function)()
    }
}

/// A [`Process`] backed by a closure.
///
/// Created with [`process_fn()`]. The input type is recorded in the wrapper
/// because a closure alone does not fix it.
pub struct ProcessFn<F, I> {
    function: F,
    _marker: PhantomData<fn(I)>,
}

/// Wraps a unary closure as a [`Process`].
pub fn process_fn<F, I, O>(function: F) -> ProcessFn<F, I>
where
    F: Fn(I) -> O,
{
    ProcessFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I, O> Process for ProcessFn<F, I>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;

    fn process(&self, input: I) -> O {
        (self.function)(input)
    }
}

/// An [`End`] backed by a closure.
///
/// Created with [`end_fn()`].
pub struct EndFn<F, I> {
    function: F,
    _marker: PhantomData<fn(I)>,
}

/// Wraps a unary, unit-returning closure as an [`End`].
pub fn end_fn<F, I>(function: F) -> EndFn<F, I>
where
    F: Fn(I),
{
    EndFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, I> End for EndFn<F, I>
where
    F: Fn(I),
{
    type Input = I;

    fn end(&self, input: I) {
        (self.function)(input);
    }
}

/// An [`Action`] backed by a closure.
///
/// Created with [`action_fn()`].
#[derive(Clone, Copy)]
pub struct ActionFn<F> {
    function: F,
}

/// Wraps a niladic, unit-returning closure as an [`Action`].
pub fn action_fn<F>(function: F) -> ActionFn<F>
where
    F: Fn(),
{
    ActionFn { function }
}

impl<F> Action for ActionFn<F>
where
    F: Fn(),
{
    fn run(&self) {
        (self.function)();
    }
}

// Manual impls: no bounds on the input type, and closures have no `Debug`.

impl<F: Clone, I> Clone for ProcessFn<F, I> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, I> Copy for ProcessFn<F, I> {}

impl<F: Clone, I> Clone for EndFn<F, I> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, I> Copy for EndFn<F, I> {}

impl<F> fmt::Debug for StartFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartFn").finish_non_exhaustive()
    }
}

impl<F, I> fmt::Debug for ProcessFn<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessFn").finish_non_exhaustive()
    }
}

impl<F, I> fmt::Debug for EndFn<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndFn").finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for ActionFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn start_fn_calls_closure_each_time() {
        let calls = Cell::new(0);
        let start = start_fn(|| {
            calls.set(calls.get() + 1);
            calls.get() * 10
        });

        assert_eq!(start.start(), 10);
        assert_eq!(start.start(), 20);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn process_fn_can_change_type() {
        let to_string = process_fn(|x: i32| x.to_string());
        assert_eq!(to_string.process(42), "42");
    }

    #[test]
    fn end_fn_receives_input() {
        let last = Cell::new(None);
        let end = end_fn(|x: u8| last.set(Some(x)));

        end.end(9);

        assert_eq!(last.get(), Some(9));
    }

    #[test]
    fn copyable_closures_stay_copyable() {
        let add = process_fn(|x: i32| x + 1);
        let copy = add;

        assert_eq!(add.process(1), copy.process(1));
    }

    #[test]
    fn debug_output_names_the_wrapper() {
        let process = process_fn(|x: i32| x);
        assert_eq!(format!("{process:?}"), "ProcessFn { .. }");
    }
}
