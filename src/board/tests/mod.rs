//! Board module tests.
//!
//! - `make_unmake.rs` - apply/revert correctness for every move class
//! - `movegen.rs` - geometric move shapes and the attack predicate
//! - `proptest.rs` - property-based tests over random boards
