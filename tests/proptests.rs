//! Property-based tests for shamrock
//!
//! This test suite uses quickcheck to verify reconstruction across randomly
//! generated genuine schemes and randomly chosen digit encodings.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/recover.rs"]
mod recover;
