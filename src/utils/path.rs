//! Program path helpers

use std::path::Path;

/// Derive the display name of the program from its invocation path
///
/// Returns the final path component, or the input unchanged when it has none.
#[must_use]
pub fn program_name(invoked_as: &str) -> String {
    Path::new(invoked_as)
        .file_name()
        .map_or_else(|| invoked_as.to_owned(), |name| name.to_string_lossy().into_owned())
}
