//! 编辑器内查找
//!
//! - Literal 模式：memchr 子串查找 + 显式整词边界检查
//! - Regex 模式：regex crate，整词选项不参与
//!
//! 对外的偏移一律是字符偏移。

use crate::models::word::{is_word_char, CaseSensitivity, LiteralFinder};
use ropey::str_utils::{byte_to_char_idx, char_to_byte_idx};
use std::ops::Range;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug)]
pub enum SearchError {
    InvalidRegex(regex::Error),
}

impl SearchError {
    pub fn is_regex_error(&self) -> bool {
        matches!(self, SearchError::InvalidRegex(_))
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidRegex(e) => write!(f, "Invalid regex: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<regex::Error> for SearchError {
    fn from(e: regex::Error) -> Self {
        SearchError::InvalidRegex(e)
    }
}

/// 一次查找的参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    pub pattern: String,
    pub use_regex: bool,
    pub match_case: bool,
    pub match_whole_word: bool,
}

impl SearchContext {
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            use_regex: true,
            ..Self::default()
        }
    }

    pub fn match_case(mut self, match_case: bool) -> Self {
        self.match_case = match_case;
        self
    }

    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.match_whole_word = whole_word;
        self
    }

    pub fn case_sensitivity(&self) -> CaseSensitivity {
        CaseSensitivity::from_match_case(self.match_case)
    }
}

/// 命中：字符区间 + 0 基行列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub col: usize,
}

impl Match {
    pub fn new(start: usize, end: usize, line: usize, col: usize) -> Self {
        Self {
            start,
            end,
            line,
            col,
        }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// 单向移动的字节/字符偏移换算游标
pub(crate) struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    /// byte 必须不小于上一次的位置
    pub fn char_of_byte(&mut self, byte: usize) -> usize {
        let byte = byte.clamp(self.byte, self.text.len());
        self.chars += self.text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }

    /// target 必须不小于上一次的位置
    pub fn byte_of_char(&mut self, target: usize) -> usize {
        let skip = target.saturating_sub(self.chars);
        let rest = &self.text[self.byte..];
        let rel = rest
            .char_indices()
            .nth(skip)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.byte += rel;
        self.chars = self.chars.max(target);
        self.byte
    }
}

/// 编译好的查找器
pub enum Searcher {
    Literal {
        pattern: String,
        case: CaseSensitivity,
        whole_word: bool,
    },
    Regex {
        regex: regex::Regex,
    },
}

impl Searcher {
    pub fn compile(context: &SearchContext) -> Result<Self> {
        if context.use_regex {
            let regex = regex::RegexBuilder::new(&context.pattern)
                .case_insensitive(!context.match_case)
                .build()?;
            Ok(Self::Regex { regex })
        } else {
            Ok(Self::Literal {
                pattern: context.pattern.clone(),
                case: context.case_sensitivity(),
                whole_word: context.match_whole_word,
            })
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    fn literal_finder<'t>(&self, text: &'t str) -> Option<LiteralFinder<'t>> {
        match self {
            Self::Literal {
                pattern,
                case,
                whole_word,
            } => Some(LiteralFinder::new(text, pattern, *case, *whole_word)),
            Self::Regex { .. } => None,
        }
    }

    /// 起点不早于字符偏移 from 的第一个非空命中
    pub fn find_forward(&self, text: &str, from: usize) -> Option<Range<usize>> {
        match self {
            Self::Literal { .. } => self.literal_finder(text)?.find(from),
            Self::Regex { regex } => {
                let mut pos = char_to_byte_idx(text, from);
                while pos <= text.len() {
                    let m = regex.find_at(text, pos)?;
                    if !m.is_empty() {
                        return Some(to_char_range(text, m.range()));
                    }
                    pos = next_char_boundary(text, m.start());
                }
                None
            }
        }
    }

    /// 结束不晚于字符偏移 before 的最后一个非空命中
    ///
    /// Regex 模式只在 before 之前的文本里匹配，逐个起点尝试：取结束位置最靠右的命中，
    /// 同一结束位置取起点最靠左的一个（与从右向左匹配的结果一致）。
    pub fn find_backward(&self, text: &str, before: usize) -> Option<Range<usize>> {
        match self {
            Self::Literal { .. } => self.literal_finder(text)?.rfind(before),
            Self::Regex { regex } => {
                let bounded = &text[..char_to_byte_idx(text, before)];
                let mut best: Option<Range<usize>> = None;
                let mut pos = 0usize;
                while pos <= bounded.len() {
                    let Some(m) = regex.find_at(bounded, pos) else {
                        break;
                    };
                    if !m.is_empty() && best.as_ref().map_or(true, |b| m.end() > b.end) {
                        best = Some(m.range());
                    }
                    // 已经命中到边界，后面的起点只会更靠右
                    if m.end() == bounded.len() && !m.is_empty() {
                        break;
                    }
                    pos = next_char_boundary(bounded, m.start());
                }
                best.map(|range| to_char_range(text, range))
            }
        }
    }

    /// 所有互不重叠的非空命中
    pub fn find_all(&self, text: &str) -> Vec<Match> {
        match self {
            Self::Regex { regex } => {
                let ranges: Vec<Range<usize>> = regex
                    .find_iter(text)
                    .filter(|m| !m.is_empty())
                    .map(|m| m.range())
                    .collect();
                locate(text, &ranges)
            }
            Self::Literal { .. } => {
                let Some(finder) = self.literal_finder(text) else {
                    return Vec::new();
                };
                let mut ranges = Vec::new();
                let mut pos = 0usize;
                while let Some(found) = finder.find_byte(pos) {
                    let end = found + finder.needle_len();
                    ranges.push(found..end);
                    pos = end;
                }
                locate(finder.haystack(), &ranges)
            }
        }
    }

    /// 替换单个命中；Regex 模式展开 $1 / ${name} 引用
    pub fn expand_replacement(&self, text: &str, range: Range<usize>, replacement: &str) -> String {
        match self {
            Self::Literal { .. } => replacement.to_string(),
            Self::Regex { regex } => {
                let start = char_to_byte_idx(text, range.start);
                let mut expanded = String::new();
                match regex.captures_at(text, start) {
                    Some(caps) => caps.expand(replacement, &mut expanded),
                    None => expanded.push_str(replacement),
                }
                expanded
            }
        }
    }

    /// 全部替换；没有任何命中时返回 None
    pub fn replace_all(&self, text: &str, replacement: &str) -> Option<String> {
        match self {
            Self::Regex { regex } => {
                // 与查找保持一致：空命中不参与替换
                let mut out = String::with_capacity(text.len());
                let mut copied = 0usize;
                let mut replaced = false;
                for caps in regex.captures_iter(text) {
                    let Some(m) = caps.get(0).filter(|m| !m.is_empty()) else {
                        continue;
                    };
                    out.push_str(&text[copied..m.start()]);
                    caps.expand(replacement, &mut out);
                    copied = m.end();
                    replaced = true;
                }
                if !replaced {
                    return None;
                }
                out.push_str(&text[copied..]);
                Some(out)
            }
            Self::Literal { .. } => {
                let finder = self.literal_finder(text)?;
                replace_all_literal(text, &finder, replacement)
            }
        }
    }
}

/// 逐个替换，整词边界以替换后的文本为准：
/// 紧跟在上一次替换之后的命中，左邻字符取替换文本的最后一个字符
fn replace_all_literal(text: &str, finder: &LiteralFinder<'_>, replacement: &str) -> Option<String> {
    let haystack = finder.haystack();
    let needle_len = finder.needle_len();
    let mut hay_cursor = CharCursor::new(haystack);
    let mut text_cursor = CharCursor::new(text);

    let mut out = String::with_capacity(text.len());
    let mut copied = 0usize;
    let mut last_end: Option<usize> = None;
    let mut pos = 0usize;
    let mut replaced = false;

    while let Some(found) = finder.next_candidate(pos) {
        let end = found + needle_len;
        if finder.whole_word() {
            let before = if last_end == Some(found) {
                out.chars().next_back()
            } else {
                haystack[..found].chars().next_back()
            };
            let after = haystack[end..].chars().next();
            if before.is_some_and(is_word_char) || after.is_some_and(is_word_char) {
                pos = found + 1;
                continue;
            }
        }

        let start_char = hay_cursor.char_of_byte(found);
        let start_byte = text_cursor.byte_of_char(start_char);
        let end_byte = text_cursor.byte_of_char(start_char + finder.needle_chars());
        out.push_str(&text[copied..start_byte]);
        out.push_str(replacement);
        copied = end_byte;
        last_end = Some(end);
        pos = end;
        replaced = true;
    }

    if !replaced {
        return None;
    }
    out.push_str(&text[copied..]);
    Some(out)
}

fn next_char_boundary(text: &str, byte: usize) -> usize {
    byte + text[byte..].chars().next().map_or(1, char::len_utf8)
}

fn to_char_range(text: &str, range: Range<usize>) -> Range<usize> {
    let start = byte_to_char_idx(text, range.start);
    start..start + text[range].chars().count()
}

/// 升序字节区间 -> 带行列的字符区间
fn locate(text: &str, ranges: &[Range<usize>]) -> Vec<Match> {
    let mut cursor = CharCursor::new(text);
    let mut matches = Vec::with_capacity(ranges.len());
    let mut line = 0usize;
    let mut line_start_char = 0usize;
    let mut scanned = 0usize;

    for range in ranges {
        let segment = &text.as_bytes()[scanned..range.start];
        let newlines = memchr::memchr_iter(b'\n', segment).count();
        if newlines > 0 {
            line += newlines;
            if let Some(last) = memchr::memrchr(b'\n', segment) {
                line_start_char = cursor.char_of_byte(scanned + last + 1);
            }
        }
        let start = cursor.char_of_byte(range.start);
        let end = start + text[range.clone()].chars().count();
        matches.push(Match::new(start, end, line, start - line_start_char));
        scanned = range.start;
    }
    matches
}

#[cfg(test)]
#[path = "../../../tests/unit/services/search/searcher.rs"]
mod tests;
