use super::*;
use pretty_assertions::assert_eq;

#[test]
fn split_counts_newlines_plus_one() {
    let lines = SourceLines::split("a\nb\n");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.iter().collect::<Vec<_>>(), vec!["a", "b", ""]);
}

#[test]
fn split_strips_carriage_return() {
    let lines = SourceLines::split("print 1\r\nassert true\r\n");
    assert_eq!(lines.get(1), Some("print 1"));
    assert_eq!(lines.get(2), Some("assert true"));
    assert_eq!(lines.get(3), Some(""));
}

#[test]
fn split_keeps_interior_carriage_return() {
    let lines = SourceLines::split("a\rb");
    assert_eq!(lines.get(1), Some("a\rb"));
}

#[test]
fn empty_text_has_one_line() {
    let lines = SourceLines::split("");
    assert_eq!(lines.len(), 1);
    assert!(!lines.is_empty());
    assert_eq!(lines.get(1), Some(""));
}

#[test]
fn get_is_one_based() {
    let lines = SourceLines::split("first\nsecond");
    assert_eq!(lines.get(0), None);
    assert_eq!(lines.get(1), Some("first"));
    assert_eq!(lines.get(2), Some("second"));
    assert_eq!(lines.get(3), None);
}
