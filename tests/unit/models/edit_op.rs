use super::*;
use ropey::Rope;

#[test]
fn test_op_id_unique() {
    let a = OpId::new();
    let b = OpId::new();
    assert_ne!(a, b);
}

#[test]
fn test_replace_bounds() {
    let op = EditOp::replace(
        2,
        "ab".to_string(),
        "xyz".to_string(),
        Selection::new(2, 4),
        Selection::caret(5),
    );
    assert_eq!(op.deleted_end(), 4);
    assert_eq!(op.inserted_end(), 5);
}

#[test]
fn test_apply_and_inverse() {
    let mut rope = Rope::from_str("0123456789");
    let op = EditOp::replace(
        3,
        "345".to_string(),
        "-".to_string(),
        Selection::new(3, 6),
        Selection::caret(4),
    );
    assert!(op.apply(&mut rope));
    assert_eq!(rope.to_string(), "012-6789");

    let inverse = op.inverse();
    assert_eq!(inverse.selection_after, Selection::new(3, 6));
    assert!(inverse.apply(&mut rope));
    assert_eq!(rope.to_string(), "0123456789");
}

#[test]
fn test_pure_insert() {
    let mut rope = Rope::from_str("ac");
    let op = EditOp::replace(
        1,
        String::new(),
        "b".to_string(),
        Selection::caret(1),
        Selection::caret(2),
    );
    assert!(op.apply(&mut rope));
    assert_eq!(rope.to_string(), "abc");
}

#[test]
fn test_json_line_round_trip() {
    let op = EditOp::replace(
        0,
        "a\nb".to_string(),
        "a b".to_string(),
        Selection::new(0, 3),
        Selection::new(0, 3),
    );
    let line = op.to_json_line();
    assert!(!line.contains('\n'));
    assert_eq!(EditOp::from_json_line(&line), Some(op));
    assert_eq!(EditOp::from_json_line("not json"), None);
}

#[test]
fn test_apply_rejects_mismatched_text() {
    let mut rope = Rope::from_str("abc");
    let out_of_range = EditOp::replace(
        2,
        "cdef".to_string(),
        String::new(),
        Selection::new(2, 6),
        Selection::caret(2),
    );
    assert!(!out_of_range.matches(&rope));
    assert!(!out_of_range.apply(&mut rope));

    let stale = EditOp::replace(
        0,
        "xy".to_string(),
        "z".to_string(),
        Selection::new(0, 2),
        Selection::caret(1),
    );
    assert!(!stale.apply(&mut rope));
    assert_eq!(rope.to_string(), "abc");
}
