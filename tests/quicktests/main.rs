//! Property and scenario tests against the public API of the tree.

mod scenarios;
mod tree;

/// Routes the crate's `log` records to the test output. Set `RUST_LOG` to see them.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
