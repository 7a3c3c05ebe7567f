//! Shared stages for the cross-crate pipeline tests.

pub mod test_stages;
