use crate::BoxEnd;

/// A stage that consumes a value and returns nothing.
///
/// `End` terminates a pipeline. It is where side effects happen: printing,
/// storing, sending. An `End` preceded by a [`Process`] is still an `End`;
/// an `End` preceded by a [`Start`] becomes an [`Action`].
///
/// [`Process`]: crate::Process
/// [`Start`]: crate::Start
/// [`Action`]: crate::Action
pub trait End {
    type Input;

    /// Consumes a single value.
    fn end(&self, input: Self::Input);

    /// Erases the concrete type of this end.
    fn boxed<'a>(self) -> BoxEnd<'a, Self::Input>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<E> End for &E
where
    E: End + ?Sized,
{
    type Input = E::Input;

    fn end(&self, input: Self::Input) {
        (**self).end(input);
    }
}

impl<E> End for Box<E>
where
    E: End + ?Sized,
{
    type Input = E::Input;

    fn end(&self, input: Self::Input) {
        (**self).end(input);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{Process, process_fn};

    struct Collect<'a> {
        into: &'a RefCell<Vec<String>>,
    }

    impl End for Collect<'_> {
        type Input = String;

        fn end(&self, input: String) {
            self.into.borrow_mut().push(input);
        }
    }

    #[test]
    fn end_receives_value() {
        let store = RefCell::new(Vec::new());
        let collect = Collect { into: &store };

        collect.end("first".to_string());
        collect.end("second".to_string());

        assert_eq!(*store.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn process_then_end_is_an_end() {
        let store = RefCell::new(Vec::new());
        let shout = process_fn(|word: &'static str| word.to_uppercase());

        let collect_loud = shout.feed(Collect { into: &store });
        collect_loud.end("quiet");
        collect_loud.end("please");

        assert_eq!(*store.borrow(), vec!["QUIET", "PLEASE"]);
    }

    #[test]
    fn boxed_end_forwards_input() {
        let store = RefCell::new(Vec::new());
        let boxed: BoxEnd<'_, String> = Collect { into: &store }.boxed();

        boxed.end("boxed".to_string());

        assert_eq!(store.borrow().len(), 1);
    }
}
