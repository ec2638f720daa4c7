//! System abstraction for process arguments, environment and file reads
//!
//! The dispatcher never touches `std::env` directly; everything it needs from
//! the process goes through this trait so tests can run against
//! [`MockSystem`].

use std::env::VarError;
use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the process-level services the driver reads
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Full argument vector, program path at index 0
    fn args(&self) -> Vec<String>;

    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
