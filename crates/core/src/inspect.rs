use crate::{Process, Start};

/// A stage that observes its output without modifying it.
///
/// Created by [`Start::inspect()`] and [`Process::inspect()`]. The handler
/// sees each value by reference right after it is produced, then the value
/// moves on untouched.
pub struct Inspect<S, Handler> {
    stage: S,
    handler: Handler,
}

impl<S, Handler> Inspect<S, Handler> {
    pub(crate) const fn new(stage: S, handler: Handler) -> Self {
        Self { stage, handler }
    }
}

impl<S, Handler> Start for Inspect<S, Handler>
where
    S: Start,
    Handler: Fn(&S::Output),
{
    type Output = S::Output;

    fn start(&self) -> Self::Output {
        let output = self.stage.start();
        (self.handler)(&output);
        output
    }
}

impl<S, Handler> Process for Inspect<S, Handler>
where
    S: Process,
    Handler: Fn(&S::Output),
{
    type Input = S::Input;
    type Output = S::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        let output = self.stage.process(input);
        (self.handler)(&output);
        output
    }
}
