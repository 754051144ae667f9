//! 基于选区的文本变换
//!
//! 每个变换读取当前缓冲区与选区，返回一次拼接（EditOp）；
//! 无事可做时返回 None。变换本身不修改缓冲区。

mod duplicate;
mod indent;
mod join;
mod move_line;
mod move_word;

pub use duplicate::duplicate;
pub use indent::{add_indentation, remove_indentation};
pub use join::join_lines;
pub use move_line::{move_lines_down, move_lines_up};
pub use move_word::{move_word_left, move_word_right};

use crate::editor::config::EditorConfig;
use crate::models::{EditOp, Selection, SelectionSpan, TextBuffer};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    AddIndentation,
    RemoveIndentation,
    Duplicate,
    JoinLines,
    MoveLinesUp,
    MoveLinesDown,
    MoveWordLeft,
    MoveWordRight,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::AddIndentation => "addIndentation",
            TransformKind::RemoveIndentation => "removeIndentation",
            TransformKind::Duplicate => "duplicate",
            TransformKind::JoinLines => "joinLines",
            TransformKind::MoveLinesUp => "moveLinesUp",
            TransformKind::MoveLinesDown => "moveLinesDown",
            TransformKind::MoveWordLeft => "moveWordLeft",
            TransformKind::MoveWordRight => "moveWordRight",
        }
    }
}

/// 选区先夹到缓冲区范围内再分派
pub fn apply(
    kind: TransformKind,
    buffer: &TextBuffer,
    selection: Selection,
    config: &EditorConfig,
) -> Option<EditOp> {
    let selection = selection.clamped(buffer.len_chars());
    match kind {
        TransformKind::AddIndentation => add_indentation(buffer, selection, config),
        TransformKind::RemoveIndentation => remove_indentation(buffer, selection, config),
        TransformKind::Duplicate => duplicate(buffer, selection),
        TransformKind::JoinLines => join_lines(buffer, selection),
        TransformKind::MoveLinesUp => move_lines_up(buffer, selection),
        TransformKind::MoveLinesDown => move_lines_down(buffer, selection),
        TransformKind::MoveWordLeft => move_word_left(buffer, selection),
        TransformKind::MoveWordRight => move_word_right(buffer, selection),
    }
}

/// 选区触及的整行块，区间不含最后一行的结束符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineBlock {
    pub first_row: usize,
    pub last_row: usize,
    pub start: usize,
    pub end: usize,
}

impl LineBlock {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.first_row..=self.last_row
    }
}

pub(crate) fn touched_block(buffer: &TextBuffer, selection: Selection) -> (SelectionSpan, LineBlock) {
    let span = buffer.selection_span(selection);
    let index = buffer.line_index();
    let first_row = span.start_line - 1;
    let last_row = span.end_line - 1;
    let block = LineBlock {
        first_row,
        last_row,
        start: index.span(first_row).start,
        end: index.span(last_row).end(),
    };
    (span, block)
}

pub(crate) fn replace_op(
    buffer: &TextBuffer,
    range: Range<usize>,
    inserted: String,
    selection_before: Selection,
    selection_after: Selection,
) -> EditOp {
    let deleted = buffer.slice(range.clone());
    EditOp::replace(
        range.start,
        deleted,
        inserted,
        selection_before,
        selection_after,
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/editor/transform.rs"]
mod tests;
