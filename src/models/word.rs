//! 单词边界扫描
//!
//! 单词 = 连续的字母/数字字符（`char::is_alphanumeric`）。
//! 整词匹配在命中位置直接检查前后各一个字符，不预先切分文档。

use memchr::memmem;
use ropey::str_utils::{byte_to_char_idx, char_to_byte_idx};
use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    pub fn from_match_case(match_case: bool) -> Self {
        if match_case {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// 从 pos 向左扫描，返回单词起点
pub fn word_start(text: &Rope, pos: usize) -> usize {
    let pos = pos.min(text.len_chars());
    let mut chars = text.chars_at(pos);
    let mut start = pos;
    while let Some(c) = chars.prev() {
        if !is_word_char(c) {
            break;
        }
        start -= 1;
    }
    start
}

/// 从 pos 向右扫描，返回单词终点（不含）
pub fn word_end(text: &Rope, pos: usize) -> usize {
    let pos = pos.min(text.len_chars());
    pos + text.chars_at(pos).take_while(|&c| is_word_char(c)).count()
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// 逐字符折叠为小写；只做一对一映射，字符数保持不变
pub fn fold_case(text: &str, case: CaseSensitivity) -> Cow<'_, str> {
    match case {
        CaseSensitivity::Sensitive => Cow::Borrowed(text),
        CaseSensitivity::Insensitive => {
            if text.chars().all(|c| fold_char(c) == c) {
                Cow::Borrowed(text)
            } else {
                Cow::Owned(text.chars().map(fold_char).collect())
            }
        }
    }
}

/// 字面量查找器
///
/// 大小写不敏感时在折叠后的文本上查找；折叠不改变字符数，
/// 所以折叠文本中的字符偏移与原文一致，字节偏移则不一定。
pub struct LiteralFinder<'t> {
    haystack: Cow<'t, str>,
    needle: String,
    needle_chars: usize,
    whole_word: bool,
}

impl<'t> LiteralFinder<'t> {
    pub fn new(text: &'t str, needle: &str, case: CaseSensitivity, whole_word: bool) -> Self {
        let needle = fold_case(needle, case).into_owned();
        Self {
            haystack: fold_case(text, case),
            needle_chars: needle.chars().count(),
            needle,
            whole_word,
        }
    }

    pub fn haystack(&self) -> &str {
        &self.haystack
    }

    pub fn needle_len(&self) -> usize {
        self.needle.len()
    }

    pub fn needle_chars(&self) -> usize {
        self.needle_chars
    }

    pub fn whole_word(&self) -> bool {
        self.whole_word
    }

    /// 字节 pos 之后的第一个原始命中（不做整词检查）
    pub fn next_candidate(&self, pos: usize) -> Option<usize> {
        if self.needle.is_empty() || pos > self.haystack.len() {
            return None;
        }
        memmem::find(&self.haystack.as_bytes()[pos..], self.needle.as_bytes()).map(|i| pos + i)
    }

    /// 结束字节不超过 limit 的最后一个原始命中
    pub fn prev_candidate(&self, limit: usize) -> Option<usize> {
        if self.needle.is_empty() {
            return None;
        }
        let limit = limit.min(self.haystack.len());
        memmem::rfind(&self.haystack.as_bytes()[..limit], self.needle.as_bytes())
    }

    /// 命中处两侧都不是单词字符
    pub fn is_whole_word_at(&self, found: usize) -> bool {
        let before = self.haystack[..found].chars().next_back();
        let after = self.haystack[found + self.needle.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }

    fn accepts(&self, found: usize) -> bool {
        !self.whole_word || self.is_whole_word_at(found)
    }

    /// 字节 pos 之后第一个满足整词条件的命中
    pub fn find_byte(&self, mut pos: usize) -> Option<usize> {
        loop {
            let found = self.next_candidate(pos)?;
            if self.accepts(found) {
                return Some(found);
            }
            pos = found + 1;
        }
    }

    pub fn rfind_byte(&self, mut limit: usize) -> Option<usize> {
        loop {
            let found = self.prev_candidate(limit)?;
            if self.accepts(found) {
                return Some(found);
            }
            // 下一个候选必须比当前命中更靠左
            limit = found + self.needle.len() - 1;
        }
    }

    /// 从字符偏移 from 起向后查找，返回命中的字符区间
    pub fn find(&self, from: usize) -> Option<Range<usize>> {
        let found = self.find_byte(char_to_byte_idx(&self.haystack, from))?;
        let start = byte_to_char_idx(&self.haystack, found);
        Some(start..start + self.needle_chars)
    }

    /// 结束位置不超过字符偏移 before 的最近一次命中
    pub fn rfind(&self, before: usize) -> Option<Range<usize>> {
        let found = self.rfind_byte(char_to_byte_idx(&self.haystack, before))?;
        let start = byte_to_char_idx(&self.haystack, found);
        Some(start..start + self.needle_chars)
    }
}

/// 从字符偏移 `from` 起向后查找 needle，返回命中的字符偏移
pub fn index_of(
    text: &str,
    from: usize,
    needle: &str,
    case: CaseSensitivity,
    whole_word: bool,
) -> Option<usize> {
    LiteralFinder::new(text, needle, case, whole_word)
        .find(from)
        .map(|r| r.start)
}

/// 向前查找结束位置不超过字符偏移 `before` 的最近一次命中
pub fn last_index_of(
    text: &str,
    before: usize,
    needle: &str,
    case: CaseSensitivity,
    whole_word: bool,
) -> Option<usize> {
    LiteralFinder::new(text, needle, case, whole_word)
        .rfind(before)
        .map(|r| r.start)
}

pub fn index_of_whole_word(
    text: &str,
    from: usize,
    needle: &str,
    case: CaseSensitivity,
) -> Option<usize> {
    index_of(text, from, needle, case, true)
}

pub fn last_index_of_whole_word(
    text: &str,
    before: usize,
    needle: &str,
    case: CaseSensitivity,
) -> Option<usize> {
    last_index_of(text, before, needle, case, true)
}

#[cfg(test)]
#[path = "../../tests/unit/models/word.rs"]
mod tests;
