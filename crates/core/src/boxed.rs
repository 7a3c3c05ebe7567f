use crate::{Action, End, Process, Start};

/// A type-erased [`Start`] producing `T`.
pub type BoxStart<'a, T> = Box<dyn Start<Output = T> + 'a>;

/// A type-erased [`Process`] mapping `I` to `O`.
pub type BoxProcess<'a, I, O> = Box<dyn Process<Input = I, Output = O> + 'a>;

/// A type-erased [`End`] consuming `I`.
pub type BoxEnd<'a, I> = Box<dyn End<Input = I> + 'a>;

/// A type-erased [`Action`].
pub type BoxAction<'a> = Box<dyn Action + 'a>;
