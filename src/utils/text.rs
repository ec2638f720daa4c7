//! Text helpers shared by the usage renderers

/// Split text into its first line and the remaining lines
///
/// The remainder keeps its original line breaks. Empty input yields two empty
/// strings.
#[must_use]
pub fn split_headline(text: &str) -> (&str, &str) {
    text.split_once('\n').unwrap_or((text, ""))
}

/// Prefix every line of `text` with `n` spaces
///
/// Lines that are blank after trimming come out fully empty, so no trailing
/// padding is ever emitted.
#[must_use]
pub fn indent(n: usize, text: &str) -> String {
    let pad = " ".repeat(n);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
