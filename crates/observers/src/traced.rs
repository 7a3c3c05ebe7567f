use std::borrow::Cow;

use tracing::{debug_span, trace};
use wand_core::{Action, End, Process, Start, pipe_operator};

/// A stage that records each invocation as a `tracing` span.
///
/// `Traced` forwards every role of the stage it wraps. Each call is entered
/// as a `stage` span at `DEBUG` level carrying the stage's `name` and `role`,
/// and a `TRACE` event marks its completion. A panic inside the stage exits
/// the span without the completion event.
///
/// Nothing is emitted unless a subscriber is installed.
///
/// # Example
///
/// ```rust
/// use wand_core::{Start, process_fn, start_fn};
/// use wand_observers::traced;
///
/// let pipeline = traced("answer", start_fn(|| 41)) | traced("increment", process_fn(|x: i32| x + 1));
/// assert_eq!(pipeline.start(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct Traced<T> {
    name: Cow<'static, str>,
    stage: T,
}

/// Wraps `stage` so each invocation is traced under `name`.
pub fn traced<T>(name: impl Into<Cow<'static, str>>, stage: T) -> Traced<T> {
    Traced {
        name: name.into(),
        stage,
    }
}

impl<T> Traced<T> {
    /// Returns the name this stage is traced under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped stage.
    pub fn into_inner(self) -> T {
        self.stage
    }
}

pipe_operator!(<T> Traced<T>);

impl<T> Start for Traced<T>
where
    T: Start,
{
    type Output = T::Output;

    fn start(&self) -> Self::Output {
        let span = debug_span!("stage", name = %self.name, role = "start");
        let _entered = span.enter();

        let output = self.stage.start();
        trace!("stage completed");
        output
    }
}

impl<T> Process for Traced<T>
where
    T: Process,
{
    type Input = T::Input;
    type Output = T::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        let span = debug_span!("stage", name = %self.name, role = "process");
        let _entered = span.enter();

        let output = self.stage.process(input);
        trace!("stage completed");
        output
    }
}

impl<T> End for Traced<T>
where
    T: End,
{
    type Input = T::Input;

    fn end(&self, input: Self::Input) {
        let span = debug_span!("stage", name = %self.name, role = "end");
        let _entered = span.enter();

        self.stage.end(input);
        trace!("stage completed");
    }
}

impl<T> Action for Traced<T>
where
    T: Action,
{
    fn run(&self) {
        let span = debug_span!("stage", name = %self.name, role = "action");
        let _entered = span.enter();

        self.stage.run();
        trace!("stage completed");
    }
}
