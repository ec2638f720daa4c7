//! Error handling module
//!
//! Defines the dispatch error taxonomy and its exit codes

pub mod types;

pub use types::*;
