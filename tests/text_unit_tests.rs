//! Unit tests for usage text helpers

use subcommand_schema::utils::{indent, split_headline};

#[test]
fn headline_split() {
    assert_eq!(split_headline("a\nb\nc"), ("a", "b\nc"));
    assert_eq!(split_headline("solo"), ("solo", ""));
    assert_eq!(split_headline(""), ("", ""));
}

#[test]
fn headline_keeps_blank_detail_lines() {
    assert_eq!(split_headline("head\n\nbody"), ("head", "\nbody"));
}

#[test]
fn indent_leaves_blank_lines_empty() {
    assert_eq!(indent(2, "x\n\ny"), "  x\n\n  y");
    assert_eq!(indent(2, "x\n \t \ny"), "  x\n\n  y");
}

#[test]
fn indent_keeps_existing_indentation() {
    assert_eq!(indent(2, "a\n  b"), "  a\n    b");
}
