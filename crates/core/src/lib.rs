//! A small algebra for composing pipeline stages.
//!
//! This crate defines four stage roles and the rules for joining them:
//!
//! - [`Start`]: produces a value from nothing (a producer)
//! - [`Process`]: maps one value into another (a transformer)
//! - [`End`]: consumes a value and returns nothing (a consumer)
//! - [`Action`]: a complete pipeline that takes and returns nothing
//!
//! Two stages compose into a [`Then`], which plays exactly one role:
//!
//! - `Start | Process` is a [`Start`]
//! - `Process | Process` is a [`Process`]
//! - `Process | End` is an [`End`]
//! - `Start | End` is an [`Action`]
//!
//! Composition is available through the `|` operator, the [`compose()`]
//! function, and the `.then()`/`.feed()` methods on [`Start`] and [`Process`].
//! Composed stages run synchronously, left to right, each exactly once per
//! call. Nothing is caught, retried, or logged along the way: a panic in one
//! stage unwinds straight to the caller.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use wand_core::{Action, end_fn, process_fn, start_fn};
//!
//! let observed = Cell::new(0);
//!
//! let pipeline = start_fn(|| 10)
//!     | process_fn(|x: i32| x + 5)
//!     | process_fn(|x: i32| x * 2)
//!     | end_fn(|x: i32| observed.set(x));
//!
//! pipeline.run();
//! assert_eq!(observed.get(), 30);
//! ```

mod action;
mod boxed;
mod closure;
mod end;
mod identity;
mod inspect;
mod pipe;
mod process;
mod start;
mod then;

pub use action::Action;
pub use boxed::{BoxAction, BoxEnd, BoxProcess, BoxStart};
pub use closure::{ActionFn, EndFn, ProcessFn, StartFn, action_fn, end_fn, process_fn, start_fn};
pub use end::{End, End as Consumer};
pub use identity::{Identity, identity};
pub use inspect::Inspect;
pub use pipe::{Pipe, pipe};
pub use process::{Process, Process as Transformer};
pub use start::{Start, Start as Producer};
pub use then::{Then, compose};
