//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod control;
mod textbook;

/// Show the solver's logging when a test fails.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
