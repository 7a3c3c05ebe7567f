use crate::{BoxStart, End, Inspect, Process, Then};

/// A stage that produces a value from nothing.
///
/// `Start` is the source of every pipeline. Each call to [`start()`] yields a
/// fresh value which the next stage consumes exactly once. Implementations
/// may close over state, but the composition algebra itself never stores,
/// caches, or replays a produced value.
///
/// A `Start` can be extended in two ways:
/// - [`Start::then()`] with a [`Process`], yielding another `Start`.
/// - [`Start::feed()`] with an [`End`], yielding an [`Action`].
///
/// Both forms are also available through the `|` operator.
///
/// # Example
///
/// ```rust
/// use wand_core::{Start, process_fn, start_fn};
///
/// let answer = start_fn(|| 42).then(process_fn(|value: i32| value.to_string()));
/// assert_eq!(answer.start(), "42");
/// ```
///
/// [`start()`]: Start::start
/// [`Action`]: crate::Action
pub trait Start {
    type Output;

    /// Produces the next value.
    fn start(&self) -> Self::Output;

    /// Composes this start with a process, producing a new start.
    ///
    /// The returned stage calls `self` first and hands its output to `next`.
    fn then<Next>(self, next: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: Process<Input = Self::Output>,
    {
        Then::new(self, next)
    }

    /// Composes this start with an end, producing a runnable action.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use wand_core::{Action, Start, end_fn, start_fn};
    ///
    /// let seen = Cell::new(0);
    /// let action = start_fn(|| 7).feed(end_fn(|value: i32| seen.set(value)));
    ///
    /// action.run();
    /// assert_eq!(seen.get(), 7);
    /// ```
    fn feed<Next>(self, end: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: End<Input = Self::Output>,
    {
        Then::new(self, end)
    }

    /// Observes each produced value without changing it.
    fn inspect<Handler>(self, handler: Handler) -> Inspect<Self, Handler>
    where
        Self: Sized,
        Handler: Fn(&Self::Output),
    {
        Inspect::new(self, handler)
    }

    /// Erases the concrete type of this start.
    fn boxed<'a>(self) -> BoxStart<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<S> Start for &S
where
    S: Start + ?Sized,
{
    type Output = S::Output;

    fn start(&self) -> Self::Output {
        (**self).start()
    }
}

impl<S> Start for Box<S>
where
    S: Start + ?Sized,
{
    type Output = S::Output;

    fn start(&self) -> Self::Output {
        (**self).start()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Constant(i32);

    impl Start for Constant {
        type Output = i32;

        fn start(&self) -> i32 {
            self.0
        }
    }

    struct Ticker {
        next: Cell<u32>,
    }

    impl Start for Ticker {
        type Output = u32;

        fn start(&self) -> u32 {
            let current = self.next.get();
            self.next.set(current + 1);
            current
        }
    }

    struct Negate;

    impl Process for Negate {
        type Input = i32;
        type Output = i32;

        fn process(&self, input: i32) -> i32 {
            -input
        }
    }

    #[test]
    fn custom_start_produces_value() {
        assert_eq!(Constant(10).start(), 10);
    }

    #[test]
    fn then_applies_process_to_output() {
        let negated = Constant(10).then(Negate);
        assert_eq!(negated.start(), -10);
    }

    #[test]
    fn stateful_start_is_called_once_per_invocation() {
        let ticker = Ticker { next: Cell::new(0) };
        let doubled = (&ticker).then(crate::process_fn(|tick: u32| tick * 2));

        assert_eq!(doubled.start(), 0);
        assert_eq!(doubled.start(), 2);
        assert_eq!(doubled.start(), 4);
        assert_eq!(ticker.next.get(), 3);
    }

    #[test]
    fn borrowed_start_can_be_reused() {
        let source = Constant(3);

        let first = (&source).then(Negate);
        let second = (&source).then(crate::process_fn(|value: i32| value + 1));

        assert_eq!(first.start(), -3);
        assert_eq!(second.start(), 4);
    }

    #[test]
    fn boxed_start_behaves_like_original() {
        let boxed = Constant(5).then(Negate).boxed();
        assert_eq!(boxed.start(), -5);

        let chained = boxed.then(Negate);
        assert_eq!(chained.start(), 5);
    }
}
