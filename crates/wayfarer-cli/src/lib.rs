//! Wayfarer CLI library.
//!
//! Dataset discovery and loading plus output formatting shared by the
//! `wayfarer` binary and its integration tests.

pub mod dataset;
pub mod output;
pub mod terminal;
