use super::replace_op;
use crate::models::{EditOp, Selection, TextBuffer};

/// 光标：复制整行到下一行，光标落在副本的同一列；
/// 选区：把选中文本紧接着插入到选区之后，选区保持不变
pub fn duplicate(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    if selection.is_empty() {
        let index = buffer.line_index();
        let line = index.span(index.row_of(selection.start()));
        let inserted = format!("\n{}", buffer.slice(line.start..line.end()));
        let after = Selection::caret(selection.start() + line.len + 1);
        return Some(replace_op(
            buffer,
            line.end()..line.end(),
            inserted,
            selection,
            after,
        ));
    }

    // 以换行结尾的选区，end 已是下一行行首，副本直接从那里开始
    let at = selection.end();
    let copied = buffer.slice(selection.range());
    Some(replace_op(buffer, at..at, copied, selection, selection))
}
