use std::{cell::Cell, rc::Rc};

use wand_core::{Action, End, Process, Start, pipe_operator};

/// A shared handle to the number of times a [`Counted`] stage was called.
#[derive(Debug, Clone, Default)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    /// Returns the number of calls so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A stage that counts how many times it is invoked.
///
/// The count is taken on entry, so a call that panics is still counted.
/// Read it through [`Counted::calls()`], which stays valid after the stage
/// has been moved into a pipeline.
#[derive(Debug, Clone)]
pub struct Counted<T> {
    stage: T,
    count: CallCount,
}

/// Wraps `stage` so its invocations are counted.
pub fn counted<T>(stage: T) -> Counted<T> {
    Counted {
        stage,
        count: CallCount::default(),
    }
}

impl<T> Counted<T> {
    /// Returns a handle to this stage's call count.
    pub fn calls(&self) -> CallCount {
        self.count.clone()
    }
}

pipe_operator!(<T> Counted<T>);

impl<T> Start for Counted<T>
where
    T: Start,
{
    type Output = T::Output;

    fn start(&self) -> Self::Output {
        self.count.increment();
        self.stage.start()
    }
}

impl<T> Process for Counted<T>
where
    T: Process,
{
    type Input = T::Input;
    type Output = T::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        self.count.increment();
        self.stage.process(input)
    }
}

impl<T> End for Counted<T>
where
    T: End,
{
    type Input = T::Input;

    fn end(&self, input: Self::Input) {
        self.count.increment();
        self.stage.end(input);
    }
}

impl<T> Action for Counted<T>
where
    T: Action,
{
    fn run(&self) {
        self.count.increment();
        self.stage.run();
    }
}
