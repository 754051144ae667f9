use super::*;

#[test]
fn test_new_session_normalizes_text() {
    let session = EditorSession::new("a\r\nb\rc");
    assert_eq!(session.text(), "a\nb\nc");
    assert_eq!(session.selection(), Selection::caret(0));
    assert_eq!(session.version(), 0);
}

#[test]
fn test_initialize_resets_selection() {
    let mut session = EditorSession::new("hello");
    session.set_selection(Selection::new(1, 4));
    session.initialize("world\r\n");
    assert_eq!(session.text(), "world\n");
    assert_eq!(session.selection(), Selection::caret(0));
    assert!(session.version() > 0);
}

#[test]
fn test_set_selection_clamps() {
    let mut session = EditorSession::new("abc");
    session.set_selection(Selection::new(2, 10));
    assert_eq!(session.selection(), Selection::new(2, 3));
}

#[test]
fn test_apply_transform_and_undo() {
    let mut session = EditorSession::new("foo\nbar\nbaz");
    let config = EditorConfig::spaces(2);
    let outcome = session.apply_transform(
        TransformKind::AddIndentation,
        Selection::new(0, 11),
        &config,
    );
    assert!(outcome.changed);
    assert_eq!(session.text(), "  foo\n  bar\n  baz");
    assert_eq!(outcome.selection, Selection::new(2, 17));
    assert_eq!(session.selection(), Selection::new(2, 17));
    assert!(session.buffer().is_line_index_dirty());
    assert_eq!(session.resolve(6), (2, 1));

    let op = outcome.op.unwrap();
    assert!(session.apply_op(&op.inverse()));
    assert_eq!(session.text(), "foo\nbar\nbaz");
    assert_eq!(session.selection(), Selection::new(0, 11));
}

#[test]
fn test_noop_transform_keeps_buffer() {
    let mut session = EditorSession::new("one\ntwo");
    let version = session.version();
    let outcome = session.apply_transform(
        TransformKind::MoveLinesUp,
        Selection::caret(1),
        &EditorConfig::default(),
    );
    assert!(!outcome.changed);
    assert!(outcome.op.is_none());
    assert_eq!(outcome.selection, Selection::caret(1));
    assert_eq!(session.text(), "one\ntwo");
    assert_eq!(session.version(), version);
}

#[test]
fn test_find_moves_selection() {
    let mut session = EditorSession::new("cat catalog cat");
    let ctx = SearchContext::literal("cat").whole_word(true);

    let outcome = session.find(&ctx, 1, SearchDirection::Forward, true).unwrap();
    assert!(outcome.found());
    assert_eq!(session.selection(), Selection::new(12, 15));

    let missing = SearchContext::literal("dog");
    let outcome = session.find(&missing, 0, SearchDirection::Forward, false).unwrap();
    assert!(!outcome.found());
    assert_eq!(session.selection(), Selection::new(12, 15));
}

#[test]
fn test_find_all_through_session() {
    let session = EditorSession::new("a\na\na");
    let all = session.find_all(&SearchContext::literal("a")).unwrap();
    assert_eq!(all.iter().map(|m| m.line).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_replace_one_replaces_selected_match() {
    let mut session = EditorSession::new("foo bar foo");
    session.set_selection(Selection::new(8, 11));
    let ctx = SearchContext::literal("foo");

    let outcome = session.replace_one(&ctx, "baz").unwrap();
    assert!(outcome.changed);
    assert_eq!(session.text(), "foo bar baz");
    assert_eq!(session.selection(), Selection::caret(11));

    let op = outcome.op.unwrap();
    assert_eq!(op.deleted, "foo");
    assert_eq!(op.inserted, "baz");
    assert_eq!(op.selection_before, Selection::new(8, 11));
}

#[test]
fn test_replace_one_without_match_collapses_selection() {
    let mut session = EditorSession::new("foo bar");
    session.set_selection(Selection::new(4, 7));
    let outcome = session.replace_one(&SearchContext::literal("foo"), "x").unwrap();
    assert!(!outcome.changed);
    assert_eq!(outcome.selection, Selection::caret(7));
    assert_eq!(session.text(), "foo bar");
}

#[test]
fn test_replace_all_and_undo() {
    let mut session = EditorSession::new("abcabcabc");
    let outcome = session
        .replace_all(&SearchContext::literal("abc"), "xyz")
        .unwrap();
    assert!(outcome.changed);
    assert_eq!(session.text(), "xyzxyzxyz");
    assert_eq!(session.selection(), Selection::caret(9));

    assert!(session.apply_op(&outcome.op.unwrap().inverse()));
    assert_eq!(session.text(), "abcabcabc");
}

#[test]
fn test_replace_all_invalid_regex() {
    let mut session = EditorSession::new("abc");
    let result = session.replace_all(&SearchContext::regex("("), "x");
    assert!(result.is_err());
    assert_eq!(session.text(), "abc");
    assert_eq!(session.version(), 0);
}

#[test]
fn test_selection_span() {
    let mut session = EditorSession::new("one two\nthree\n");
    session.set_selection(Selection::new(0, 14));
    let span = session.selection_span();
    assert_eq!(span.start_line, 1);
    assert_eq!(span.end_line, 2);
    assert_eq!(span.word_count, 3);
}

#[test]
fn test_apply_op_from_other_document_is_ignored() {
    let mut source = EditorSession::new("a\nb\nc\nd");
    let joined = source.apply_transform(
        TransformKind::JoinLines,
        Selection::new(0, 7),
        &EditorConfig::default(),
    );
    let op = joined.op.unwrap();

    let mut other = EditorSession::new("x");
    other.set_selection(Selection::caret(1));
    assert!(!other.apply_op(&op.inverse()));
    assert!(!other.apply_op(&op));
    assert_eq!(other.text(), "x");
    assert_eq!(other.selection(), Selection::caret(1));
    assert_eq!(other.version(), 0);
}
