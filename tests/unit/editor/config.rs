use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.tab_size, 4);
    assert_eq!(config.indent_style, IndentStyle::Spaces);
    assert_eq!(config.indent_unit(), IndentUnit::Spaces(4));
}

#[test]
fn test_indent_unit_text() {
    assert_eq!(IndentUnit::Tab.text(), "\t");
    assert_eq!(IndentUnit::Tab.len_chars(), 1);
    assert_eq!(IndentUnit::Spaces(2).text(), "  ");
    assert_eq!(EditorConfig::tabs(8).indent_unit(), IndentUnit::Tab);
}

#[test]
fn test_zero_tab_size_is_clamped() {
    let config = EditorConfig::spaces(0);
    assert_eq!(config.tab_size(), 1);
    assert_eq!(config.indent_unit(), IndentUnit::Spaces(1));
}

#[test]
fn test_from_json_partial() {
    let config = EditorConfig::from_json_str(r#"{"indent_style":"tabs"}"#).unwrap();
    assert_eq!(config.indent_style, IndentStyle::Tabs);
    assert_eq!(config.tab_size, 4);

    let config = EditorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EditorConfig::default());

    assert!(EditorConfig::from_json_str(r#"{"indent_style":"both"}"#).is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"indent_style":"spaces","tab_size":2}}"#).unwrap();
    let config = EditorConfig::load(file.path()).unwrap();
    assert_eq!(config.indent_unit(), IndentUnit::Spaces(2));
}

#[test]
fn test_load_missing_or_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(EditorConfig::load(&dir.path().join("missing.json")).is_none());

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();
    assert!(EditorConfig::load(&path).is_none());
}
