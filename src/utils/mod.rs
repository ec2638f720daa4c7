//! Shared helpers for usage rendering

pub mod path;
pub mod text;

pub use text::{indent, split_headline};
