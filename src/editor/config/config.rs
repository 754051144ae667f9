use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    Tabs,
    #[default]
    Spaces,
}

/// 一级缩进：一个制表符或 N 个空格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnit {
    Tab,
    Spaces(u8),
}

impl IndentUnit {
    pub fn text(&self) -> String {
        match self {
            IndentUnit::Tab => "\t".to_string(),
            IndentUnit::Spaces(n) => " ".repeat(*n as usize),
        }
    }

    /// 插入一级缩进占用的字符数
    pub fn len_chars(&self) -> usize {
        match self {
            IndentUnit::Tab => 1,
            IndentUnit::Spaces(n) => *n as usize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub indent_style: IndentStyle,
    /// Tab 宽度，同时也是空格缩进的宽度
    pub tab_size: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces,
            tab_size: 4,
        }
    }
}

impl EditorConfig {
    pub fn tabs(tab_size: u8) -> Self {
        Self {
            indent_style: IndentStyle::Tabs,
            tab_size,
        }
    }

    pub fn spaces(tab_size: u8) -> Self {
        Self {
            indent_style: IndentStyle::Spaces,
            tab_size,
        }
    }

    pub fn tab_size(&self) -> u8 {
        self.tab_size.max(1)
    }

    pub fn indent_unit(&self) -> IndentUnit {
        match self.indent_style {
            IndentStyle::Tabs => IndentUnit::Tab,
            IndentStyle::Spaces => IndentUnit::Spaces(self.tab_size()),
        }
    }

    pub fn from_json_str(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn load(path: &Path) -> Option<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "editor config unreadable");
                return None;
            }
        };
        match Self::from_json_str(&data) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "editor config invalid");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/editor/config.rs"]
mod tests;
