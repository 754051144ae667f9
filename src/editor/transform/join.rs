use super::{replace_op, touched_block};
use crate::models::{EditOp, Selection, TextBuffer};

/// 把触及的各行用单个空格连接；选区偏移原样保留
pub fn join_lines(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    let (span, block) = touched_block(buffer, selection);
    if span.is_single_line() {
        return None;
    }

    let joined = buffer.slice(block.range()).replace('\n', " ");
    Some(replace_op(buffer, block.range(), joined, selection, selection))
}
