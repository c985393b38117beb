//! Cargo needs a target for this package; it has no code of its own.
//! The integration tests live in `tests/harness.rs`.
