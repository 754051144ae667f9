use super::*;

#[test]
fn test_word_start_end() {
    let rope = Rope::from_str("let foo_bar = baz42;");
    assert_eq!(word_start(&rope, 6), 4);
    assert_eq!(word_end(&rope, 6), 7);
    // '_' 不是单词字符
    assert_eq!(word_start(&rope, 8), 8);
    assert_eq!(word_end(&rope, 8), 11);
    assert_eq!(word_start(&rope, 19), 14);
    assert_eq!(word_end(&rope, 14), 19);
    assert_eq!(word_start(&rope, 0), 0);
    assert_eq!(word_end(&rope, 100), 20);
}

#[test]
fn test_word_bounds_unicode() {
    let rope = Rope::from_str("变量名 café");
    assert_eq!(word_end(&rope, 0), 3);
    assert_eq!(word_start(&rope, 8), 4);
    assert_eq!(word_end(&rope, 4), 8);
}

#[test]
fn test_fold_case_keeps_char_count() {
    let folded = fold_case("ÀB\u{130}c", CaseSensitivity::Insensitive);
    assert_eq!(folded.chars().count(), 4);
    assert!(folded.starts_with("àb"));
    assert!(matches!(
        fold_case("abc", CaseSensitivity::Insensitive),
        Cow::Borrowed(_)
    ));
}

#[test]
fn test_index_of_plain() {
    let text = "abc ABC abc";
    assert_eq!(index_of(text, 0, "abc", CaseSensitivity::Sensitive, false), Some(0));
    assert_eq!(index_of(text, 1, "abc", CaseSensitivity::Sensitive, false), Some(8));
    assert_eq!(index_of(text, 1, "abc", CaseSensitivity::Insensitive, false), Some(4));
    assert_eq!(index_of(text, 9, "abc", CaseSensitivity::Sensitive, false), None);
    assert_eq!(index_of(text, 0, "", CaseSensitivity::Sensitive, false), None);
}

#[test]
fn test_index_of_counts_chars_not_bytes() {
    let text = "ñandú ÑANDÚ";
    assert_eq!(index_of(text, 1, "ñandú", CaseSensitivity::Insensitive, false), Some(6));
    assert_eq!(last_index_of(text, 11, "ÑANDÚ", CaseSensitivity::Sensitive, false), Some(6));
}

#[test]
fn test_index_of_whole_word() {
    let text = "cat catalog cat";
    assert_eq!(index_of_whole_word(text, 0, "cat", CaseSensitivity::Sensitive), Some(0));
    assert_eq!(index_of_whole_word(text, 3, "cat", CaseSensitivity::Sensitive), Some(12));
    assert_eq!(index_of_whole_word(text, 13, "cat", CaseSensitivity::Sensitive), None);
    assert_eq!(index_of_whole_word("concat", 0, "cat", CaseSensitivity::Sensitive), None);
    assert_eq!(index_of_whole_word("(cat)", 0, "cat", CaseSensitivity::Sensitive), Some(1));
}

#[test]
fn test_last_index_of_whole_word() {
    let text = "cat catalog cat";
    assert_eq!(last_index_of_whole_word(text, 15, "cat", CaseSensitivity::Sensitive), Some(12));
    assert_eq!(last_index_of_whole_word(text, 12, "cat", CaseSensitivity::Sensitive), Some(0));
    assert_eq!(last_index_of_whole_word(text, 2, "cat", CaseSensitivity::Sensitive), None);
    assert_eq!(last_index_of_whole_word("CAT bobcat", 10, "cat", CaseSensitivity::Insensitive), Some(0));
}

#[test]
fn test_whole_word_results_never_touch_word_chars() {
    let text = "a1a a 1a1 a_a aa a";
    let chars: Vec<char> = text.chars().collect();
    let mut from = 0;
    while let Some(pos) = index_of_whole_word(text, from, "a", CaseSensitivity::Sensitive) {
        if pos > 0 {
            assert!(!chars[pos - 1].is_alphanumeric());
        }
        if pos + 1 < chars.len() {
            assert!(!chars[pos + 1].is_alphanumeric());
        }
        from = pos + 1;
    }
    assert_eq!(from, chars.len());
}
