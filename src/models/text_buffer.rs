//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope），统一使用 '\n' 作为行结束符
//! - 版本号：每次修改递增
//! - 行索引缓存：修改时丢弃，下次查询时重建

use super::edit_op::EditOp;
use super::line_index::{LineIndex, SelectionSpan};
use super::selection::Selection;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::cell::OnceCell;
use std::ops::Range;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// "\r\n" 与单独的 '\r' 统一为 '\n'；富文本控件末尾附带的单个 '\r' 直接丢弃
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let text = text.strip_suffix('\r').unwrap_or(text);
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[derive(Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    version: u64,
    line_index: OnceCell<LineIndex>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_line_endings(text)),
            version: 0,
            line_index: OnceCell::new(),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn as_cow(&self) -> Cow<'_, str> {
        slice_to_cow(self.rope.slice(..))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn len_lines(&self) -> usize {
        self.line_index().line_count()
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    /// 越界部分被截断
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    pub fn line_index(&self) -> &LineIndex {
        self.line_index.get_or_init(|| LineIndex::build(&self.rope))
    }

    pub fn is_line_index_dirty(&self) -> bool {
        self.line_index.get().is_none()
    }

    pub fn resolve(&self, offset: usize) -> (usize, usize) {
        self.line_index().resolve(offset)
    }

    pub fn selection_span(&self, selection: Selection) -> SelectionSpan {
        self.line_index().selection_span(&self.rope, selection)
    }

    /// 整体替换文本
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(&normalize_line_endings(text));
        self.touch();
    }

    /// 用 text 替换字符区间 range，返回插入文本的结束偏移
    pub fn splice(&mut self, range: Range<usize>, text: &str) -> usize {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if end > start {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        self.touch();
        start + text.chars().count()
    }

    /// 应用一次编辑；过期或不属于本缓冲区的操作被忽略并返回 false
    pub fn apply(&mut self, op: &EditOp) -> bool {
        if !op.apply(&mut self.rope) {
            tracing::warn!(
                id = %op.id,
                start = op.start,
                deleted_chars = op.deleted.chars().count(),
                len_chars = self.rope.len_chars(),
                "edit op does not match buffer; ignored"
            );
            return false;
        }
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.version += 1;
        self.line_index = OnceCell::new();
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len_chars", &self.rope.len_chars())
            .field("version", &self.version)
            .field("line_index_dirty", &self.is_line_index_dirty())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
