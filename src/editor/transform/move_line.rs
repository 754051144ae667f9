use super::{replace_op, touched_block};
use crate::models::{EditOp, Selection, TextBuffer};

/// 与上一行交换；结束符数量不变，总长度不变
pub fn move_lines_up(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    let (_, block) = touched_block(buffer, selection);
    if block.first_row == 0 {
        return None;
    }

    let prev = buffer.line_index().span(block.first_row - 1);
    let inserted = format!(
        "{}\n{}",
        buffer.slice(block.range()),
        buffer.slice(prev.start..prev.end())
    );
    let after = selection.shifted(-((prev.len + 1) as isize));
    Some(replace_op(
        buffer,
        prev.start..block.end,
        inserted,
        selection,
        after,
    ))
}

pub fn move_lines_down(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    let (_, block) = touched_block(buffer, selection);
    let index = buffer.line_index();
    if block.last_row + 1 >= index.line_count() {
        return None;
    }

    let next = index.span(block.last_row + 1);
    let inserted = format!(
        "{}\n{}",
        buffer.slice(next.start..next.end()),
        buffer.slice(block.range())
    );
    // 选区末端在下一行行首时，平移后可能越过文末
    let after = selection
        .shifted((next.len + 1) as isize)
        .clamped(buffer.len_chars());
    Some(replace_op(
        buffer,
        block.start..next.end(),
        inserted,
        selection,
        after,
    ))
}
