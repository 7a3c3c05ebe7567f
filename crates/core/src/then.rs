use crate::{Action, End, Process, Start};

/// Two stages composed in sequence.
///
/// `Then<A, B>` calls `A` and moves its output into `B`. Which role the pair
/// plays depends on the roles of its parts:
///
/// | `A`         | `B`         | `Then<A, B>` |
/// |-------------|-------------|--------------|
/// | [`Start`]   | [`Process`] | [`Start`]    |
/// | [`Process`] | [`Process`] | [`Process`]  |
/// | [`Process`] | [`End`]     | [`End`]      |
/// | [`Start`]   | [`End`]     | [`Action`]   |
///
/// In every case `A::Output` must equal `B::Input`. A pairing that matches
/// none of the rows still builds, but has no role and cannot be called.
///
/// `Then` is what `.then()`, `.feed()`, [`compose()`], and the `|` operator
/// all return. It adds nothing to the call: no buffering, no error handling,
/// no logging. A panic in `A` unwinds before `B` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Creates a new sequential composition of two stages.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns the stage that runs first.
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns the stage that runs second.
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Splits the composition back into its stages.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Composes two stages in sequence.
///
/// Equivalent to `first | second` for stage types that support the operator,
/// and usable with any stage type.
///
/// # Example
///
/// ```rust
/// use wand_core::{Start, compose, process_fn, start_fn};
///
/// let composed = compose(start_fn(|| 42), process_fn(|x: i32| x.to_string()));
/// assert_eq!(composed.start(), "42");
/// ```
pub const fn compose<A, B>(first: A, second: B) -> Then<A, B> {
    Then::new(first, second)
}

impl<A, B> Start for Then<A, B>
where
    A: Start,
    B: Process<Input = A::Output>,
{
    type Output = B::Output;

    fn start(&self) -> Self::Output {
        let value = self.first.start();
        self.second.process(value)
    }
}

impl<A, B> Process for Then<A, B>
where
    A: Process,
    B: Process<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        let value = self.first.process(input);
        self.second.process(value)
    }
}

impl<A, B> End for Then<A, B>
where
    A: Process,
    B: End<Input = A::Output>,
{
    type Input = A::Input;

    fn end(&self, input: Self::Input) {
        let value = self.first.process(input);
        self.second.end(value);
    }
}

impl<A, B> Action for Then<A, B>
where
    A: Start,
    B: End<Input = A::Output>,
{
    fn run(&self) {
        let value = self.first.start();
        self.second.end(value);
    }
}
