use super::*;

#[test]
fn test_new_orders_bounds() {
    let sel = Selection::new(7, 3);
    assert_eq!(sel.start(), 3);
    assert_eq!(sel.end(), 7);
    assert_eq!(sel.len(), 4);
    assert!(!sel.is_empty());
}

#[test]
fn test_caret() {
    let sel = Selection::caret(5);
    assert!(sel.is_empty());
    assert_eq!(sel.range(), 5..5);
    assert!(!sel.contains(5));
}

#[test]
fn test_clamped() {
    let sel = Selection::new(4, 20).clamped(10);
    assert_eq!(sel, Selection::new(4, 10));

    let sel = Selection::new(15, 20).clamped(10);
    assert_eq!(sel, Selection::caret(10));
}

#[test]
fn test_shifted() {
    let sel = Selection::new(4, 8);
    assert_eq!(sel.shifted(3), Selection::new(7, 11));
    assert_eq!(sel.shifted(-4), Selection::new(0, 4));
    assert_eq!(sel.shifted(-6), Selection::new(0, 2));
}

#[test]
fn test_collapse_to_end() {
    assert_eq!(Selection::new(2, 9).collapse_to_end(), Selection::caret(9));
}

#[test]
fn test_deserialize_orders_bounds() {
    let sel: Selection = serde_json::from_str(r#"{"start":9,"end":2}"#).unwrap();
    assert_eq!(sel, Selection::new(2, 9));
    assert_eq!(sel.len(), 7);

    let json = serde_json::to_string(&Selection::new(1, 4)).unwrap();
    assert_eq!(json, r#"{"start":1,"end":4}"#);
}
