use crate::{Action, End, Process, Start};

/// Implements the `|` operator for one or more stage types.
///
/// Each listed type gains `BitOr<Rhs>` with `Output = Then<Self, Rhs>`, so
/// `stage | next` builds the same value as `compose(stage, next)`.
///
/// Every stage type in this crate already has the operator. Crates that
/// define their own stage types can use this macro to join in; for types
/// from elsewhere, wrap the first stage with [`pipe()`] instead.
///
/// # Example
///
/// ```rust
/// use wand_core::{Start, pipe_operator, process_fn};
///
/// struct Seven;
///
/// impl Start for Seven {
///     type Output = u32;
///
///     fn start(&self) -> u32 {
///         7
///     }
/// }
///
/// pipe_operator!(<> Seven);
///
/// let squared = Seven | process_fn(|x: u32| x * x);
/// assert_eq!(squared.start(), 49);
/// ```
#[macro_export]
macro_rules! pipe_operator {
    ($(<$($param:ident),*> $stage:ty),+ $(,)?) => {
        $(
            impl<$($param,)* Rhs> ::core::ops::BitOr<Rhs> for $stage {
                type Output = $crate::Then<Self, Rhs>;

                fn bitor(self, next: Rhs) -> Self::Output {
                    $crate::Then::new(self, next)
                }
            }
        )+
    };
}

pipe_operator! {
    <F> crate::StartFn<F>,
    <F, I> crate::ProcessFn<F, I>,
    <F, I> crate::EndFn<F, I>,
    <F> crate::ActionFn<F>,
    <T> crate::Identity<T>,
    <S, Handler> crate::Inspect<S, Handler>,
    <A, B> crate::Then<A, B>,
    <T> Pipe<T>,
}

/// A stage lifted into the `|` operator.
///
/// `Pipe` forwards whichever roles its content implements, unchanged. Use it
/// to start a `|` chain from a stage type that does not implement the
/// operator itself, such as a boxed stage or a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pipe<T>(T);

impl<T> Pipe<T> {
    /// Returns the wrapped stage.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Lifts any stage into the `|` operator.
///
/// # Example
///
/// ```rust
/// use wand_core::{Process, pipe, process_fn};
///
/// struct Halve;
///
/// impl Process for Halve {
///     type Input = f64;
///     type Output = f64;
///
///     fn process(&self, input: f64) -> f64 {
///         input / 2.0
///     }
/// }
///
/// let composed = pipe(Halve) | Halve | process_fn(|x: f64| x.to_string());
/// assert_eq!(composed.process(10.0), "2.5");
/// ```
pub const fn pipe<T>(stage: T) -> Pipe<T> {
    Pipe(stage)
}

impl<T> Start for Pipe<T>
where
    T: Start,
{
    type Output = T::Output;

    fn start(&self) -> Self::Output {
        self.0.start()
    }
}

impl<T> Process for Pipe<T>
where
    T: Process,
{
    type Input = T::Input;
    type Output = T::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        self.0.process(input)
    }
}

impl<T> End for Pipe<T>
where
    T: End,
{
    type Input = T::Input;

    fn end(&self, input: Self::Input) {
        self.0.end(input);
    }
}

impl<T> Action for Pipe<T>
where
    T: Action,
{
    fn run(&self) {
        self.0.run();
    }
}
