use crate::BoxAction;

/// A fully composed, runnable pipeline.
///
/// An `Action` takes nothing and returns nothing. It is what a [`Start`]
/// becomes once it is fed into an [`End`]: every stage is bound, and calling
/// [`run()`] drives one value from the start through to the end.
///
/// An action can be run any number of times. Each run is independent and
/// evaluates every stage exactly once, left to right.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use wand_core::{Action, end_fn, process_fn, start_fn};
///
/// let log = RefCell::new(Vec::new());
///
/// let pipeline = start_fn(|| 10)
///     | process_fn(|x: i32| x + 5)
///     | process_fn(|x: i32| x * 2)
///     | end_fn(|x: i32| log.borrow_mut().push(x));
///
/// pipeline.run();
/// pipeline.run();
/// assert_eq!(*log.borrow(), vec![30, 30]);
/// ```
///
/// [`Start`]: crate::Start
/// [`End`]: crate::End
/// [`run()`]: Action::run
pub trait Action {
    /// Runs the pipeline once.
    fn run(&self);

    /// Erases the concrete type of this action.
    fn boxed<'a>(self) -> BoxAction<'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<A> Action for &A
where
    A: Action + ?Sized,
{
    fn run(&self) {
        (**self).run();
    }
}

impl<A> Action for Box<A>
where
    A: Action + ?Sized,
{
    fn run(&self) {
        (**self).run();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::{action_fn, end_fn, start_fn};

    #[test]
    fn action_fn_runs_closure() {
        let runs = Cell::new(0);
        let bump = action_fn(|| runs.set(runs.get() + 1));

        bump.run();
        bump.run();

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn boxed_actions_run_in_order() {
        let order = RefCell::new(Vec::new());

        let actions: Vec<BoxAction<'_>> = vec![
            (start_fn(|| "a") | end_fn(|v: &'static str| order.borrow_mut().push(v))).boxed(),
            action_fn(|| order.borrow_mut().push("b")).boxed(),
            (start_fn(|| "c") | end_fn(|v: &'static str| order.borrow_mut().push(v))).boxed(),
        ];

        for action in &actions {
            action.run();
        }

        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
