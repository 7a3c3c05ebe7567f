use crate::{BoxProcess, End, Inspect, Then};

/// A stage that maps one value into another.
///
/// `Process` is the middle of a pipeline. It receives each upstream value
/// exactly once, synchronously, and its result moves on to the next stage.
///
/// Processes compose with each other through [`Process::then()`], and into an
/// [`End`] through [`Process::feed()`]. Composition is associative, so
/// `(a | b) | c` and `a | (b | c)` describe the same mapping.
///
/// # Example
///
/// ```rust
/// use wand_core::{Process, process_fn};
///
/// let add_one = process_fn(|x: i32| x + 1);
/// let double = process_fn(|x: i32| x * 2);
///
/// let composed = add_one.then(double);
/// assert_eq!(composed.process(3), 8);
/// ```
pub trait Process {
    type Input;
    type Output;

    /// Maps a single input to its output.
    fn process(&self, input: Self::Input) -> Self::Output;

    /// Composes this process with another, applying `self` first.
    fn then<Next>(self, next: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: Process<Input = Self::Output>,
    {
        Then::new(self, next)
    }

    /// Composes this process with an end, producing a new end.
    ///
    /// The returned stage accepts `Self::Input`, processes it, and passes the
    /// result to `end`.
    fn feed<Next>(self, end: Next) -> Then<Self, Next>
    where
        Self: Sized,
        Next: End<Input = Self::Output>,
    {
        Then::new(self, end)
    }

    /// Observes each output without changing it.
    fn inspect<Handler>(self, handler: Handler) -> Inspect<Self, Handler>
    where
        Self: Sized,
        Handler: Fn(&Self::Output),
    {
        Inspect::new(self, handler)
    }

    /// Erases the concrete type of this process.
    fn boxed<'a>(self) -> BoxProcess<'a, Self::Input, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<P> Process for &P
where
    P: Process + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        (**self).process(input)
    }
}

impl<P> Process for Box<P>
where
    P: Process + ?Sized,
{
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: Self::Input) -> Self::Output {
        (**self).process(input)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::process_fn;

    struct Scale {
        factor: f64,
    }

    impl Process for Scale {
        type Input = f64;
        type Output = f64;

        fn process(&self, input: f64) -> f64 {
            input * self.factor
        }
    }

    struct Offset(f64);

    impl Process for Offset {
        type Input = f64;
        type Output = f64;

        fn process(&self, input: f64) -> f64 {
            input + self.0
        }
    }

    struct Describe;

    impl Process for Describe {
        type Input = f64;
        type Output = String;

        fn process(&self, input: f64) -> String {
            format!("{input:.1} F")
        }
    }

    #[test]
    fn celsius_to_fahrenheit() {
        let to_fahrenheit = Scale { factor: 1.8 }.then(Offset(32.0));

        assert_relative_eq!(to_fahrenheit.process(100.0), 212.0);
        assert_relative_eq!(to_fahrenheit.process(-40.0), -40.0);
        assert_relative_eq!(to_fahrenheit.process(37.0), 98.6, epsilon = 1e-12);
    }

    #[test]
    fn output_type_can_change_along_the_chain() {
        let report = Scale { factor: 1.8 }.then(Offset(32.0)).then(Describe);
        assert_eq!(report.process(20.0), "68.0 F");
    }

    #[test]
    fn composition_is_associative() {
        let left = Scale { factor: 3.0 }
            .then(Offset(1.5))
            .then(Scale { factor: 0.5 });
        let right = Scale { factor: 3.0 }.then(Offset(1.5).then(Scale { factor: 0.5 }));

        for input in [-4.0, 0.0, 0.25, 10.0, 1e6] {
            assert_relative_eq!(left.process(input), right.process(input));
        }
    }

    #[test]
    fn then_matches_manual_nesting() {
        let magnitude = process_fn(|value: i64| value.unsigned_abs());
        let is_even = process_fn(|value: u64| value % 2 == 0);

        for value in [-3, -2, 0, 7, 10] {
            assert_eq!(
                (&magnitude).then(&is_even).process(value),
                is_even.process(magnitude.process(value))
            );
        }
    }

    #[test]
    fn boxed_processes_share_a_type() {
        let stages: Vec<BoxProcess<'_, f64, f64>> = vec![
            Scale { factor: 2.0 }.boxed(),
            Offset(-1.0).boxed(),
            Scale { factor: 2.0 }.then(Offset(-1.0)).boxed(),
        ];

        let results: Vec<f64> = stages.iter().map(|stage| stage.process(4.0)).collect();
        assert_eq!(results, vec![8.0, 3.0, 7.0]);
    }
}
