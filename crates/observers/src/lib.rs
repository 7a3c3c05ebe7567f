//! Reusable observation stages for wand pipelines.
//!
//! The composition algebra in `wand-core` never observes what flows through
//! it. The stages in this crate do, and they compose like any other stage:
//!
//! - [`Traced`]: wraps any stage in a `tracing` span per invocation
//! - [`Recorder`]: an [`End`] that keeps every value it receives
//! - [`Counted`]: wraps any stage and counts its invocations
//!
//! [`Recorder`] and [`Counted`] share their state through `Rc`, matching the
//! single-threaded model of the algebra.
//!
//! [`End`]: wand_core::End

mod counted;
mod recorder;
mod traced;

pub use counted::{CallCount, Counted, counted};
pub use recorder::Recorder;
pub use traced::{Traced, traced};
