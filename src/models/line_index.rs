//! 行索引：字符偏移 ↔ (行, 列) 映射
//!
//! 只把 '\n' 当作行结束符。行号、列号对外均从 1 开始。

use super::selection::Selection;
use super::word::is_word_char;
use ropey::Rope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// 行首字符偏移
    pub start: usize,
    /// 行长度，不含结束符
    pub len: usize,
}

impl LineSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// 选区覆盖的行列范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub word_count: usize,
    pub line_count: usize,
}

impl SelectionSpan {
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    pub fn touched_lines(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<LineSpan>,
    len_chars: usize,
}

impl LineIndex {
    pub fn build(rope: &Rope) -> Self {
        let mut lines = Vec::with_capacity(rope.len_lines());
        let mut start = 0usize;
        for (idx, ch) in rope.chars().enumerate() {
            if ch == '\n' {
                lines.push(LineSpan {
                    start,
                    len: idx - start,
                });
                start = idx + 1;
            }
        }
        lines.push(LineSpan {
            start,
            len: rope.len_chars() - start,
        });

        Self {
            lines,
            len_chars: rope.len_chars(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// 0 基行号对应的行区间
    pub fn span(&self, row: usize) -> LineSpan {
        self.lines[row.min(self.lines.len() - 1)]
    }

    /// 偏移所在行（0 基）
    pub fn row_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len_chars);
        match self.lines.binary_search_by(|span| span.start.cmp(&offset)) {
            Ok(row) => row,
            Err(row) => row.saturating_sub(1),
        }
    }

    pub fn resolve(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.len_chars);
        let row = self.row_of(offset);
        (row + 1, offset - self.lines[row].start + 1)
    }

    /// 行号越界时夹到首/末行
    pub fn line_start(&self, line: usize) -> usize {
        self.span(line.saturating_sub(1)).start
    }

    pub fn line_length(&self, line: usize) -> usize {
        self.span(line.saturating_sub(1)).len
    }

    /// (行, 列) -> 偏移，列超出行尾时停在行尾
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let span = self.span(line.saturating_sub(1));
        span.start + column.saturating_sub(1).min(span.len)
    }

    /// 选区末端恰好落在换行符之后时，视为上一行的行尾
    pub fn selection_span(&self, rope: &Rope, selection: Selection) -> SelectionSpan {
        let selection = selection.clamped(self.len_chars);
        let (start_line, start_column) = self.resolve(selection.start());

        let mut end = selection.end();
        if end != selection.start() && end > 0 && rope.char(end - 1) == '\n' {
            end -= 1;
        }
        let (end_line, end_column) = self.resolve(end);

        SelectionSpan {
            start_line,
            end_line,
            start_column,
            end_column,
            word_count: count_words(rope, selection),
            line_count: self.line_count(),
        }
    }
}

fn count_words(rope: &Rope, selection: Selection) -> usize {
    let mut count = 0usize;
    let mut in_word = false;
    for ch in rope.slice(selection.range()).chars() {
        let word = is_word_char(ch);
        if word && !in_word {
            count += 1;
        }
        in_word = word;
    }
    count
}

#[cfg(test)]
#[path = "../../tests/unit/models/line_index.rs"]
mod tests;
