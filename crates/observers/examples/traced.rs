//! Runs a small traced pipeline and prints what each stage did.
//!
//! # Usage
//!
//! ```text
//! cargo run --example traced
//! RUST_LOG=debug cargo run --example traced
//! ```

use tracing_subscriber::EnvFilter;
use wand_core::{Action, end_fn, process_fn, start_fn};
use wand_observers::{Recorder, counted, traced};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .init();

    let recorder = Recorder::new();

    let source = counted(start_fn(|| 10));
    let source_calls = source.calls();

    let pipeline = traced("source", source)
        | traced("add_five", process_fn(|x: i32| x + 5))
        | traced("double", process_fn(|x: i32| x * 2))
        | traced("record", recorder.clone());

    for _ in 0..3 {
        pipeline.run();
    }

    tracing::info!(
        values = ?recorder.values(),
        source_calls = source_calls.get(),
        "pipeline finished"
    );

    let greeting = start_fn(|| 42) | process_fn(|x: i32| x.to_string());
    let announce = traced("announce", end_fn(|text: String| println!("the answer is {text}")));
    (greeting | announce).run();
}
