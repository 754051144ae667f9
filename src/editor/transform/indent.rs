use super::{replace_op, touched_block};
use crate::editor::config::EditorConfig;
use crate::models::{EditOp, Selection, TextBuffer};

/// 单行：在选区起点插入一级缩进并折叠选区；多行：逐行前置缩进
pub fn add_indentation(
    buffer: &TextBuffer,
    selection: Selection,
    config: &EditorConfig,
) -> Option<EditOp> {
    let unit = config.indent_unit();
    let unit_text = unit.text();
    let unit_len = unit.len_chars();
    let (span, block) = touched_block(buffer, selection);

    if span.is_single_line() {
        let at = selection.start();
        let after = Selection::caret(at + unit_len);
        return Some(replace_op(buffer, at..at, unit_text, selection, after));
    }

    let original = buffer.slice(block.range());
    let indented = original
        .split('\n')
        .map(|line| format!("{unit_text}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    if indented == original {
        return None;
    }

    let after = Selection::new(
        selection.start() + unit_len,
        selection.end() + unit_len * span.touched_lines(),
    );
    Some(replace_op(buffer, block.range(), indented, selection, after))
}

/// 每行去掉一个前导 Tab，否则去掉至多 tab_size 个前导空格
pub fn remove_indentation(
    buffer: &TextBuffer,
    selection: Selection,
    config: &EditorConfig,
) -> Option<EditOp> {
    let tab_size = config.tab_size() as usize;
    let (_, block) = touched_block(buffer, selection);

    let original = buffer.slice(block.range());
    let mut removed = Vec::with_capacity(block.rows().count());
    let mut dedented = String::with_capacity(original.len());
    for (i, line) in original.split('\n').enumerate() {
        if i > 0 {
            dedented.push('\n');
        }
        let strip = if line.starts_with('\t') {
            1
        } else {
            line.chars().take(tab_size).take_while(|&c| c == ' ').count()
        };
        // 去掉的都是 ASCII 字符，字节数等于字符数
        dedented.push_str(&line[strip..]);
        removed.push(strip);
    }

    let total: usize = removed.iter().sum();
    if total == 0 {
        return None;
    }

    let index = buffer.line_index();
    let map = |offset: usize| -> usize {
        if offset < block.start {
            return offset;
        }
        let row = index.row_of(offset);
        if row > block.last_row {
            return offset - total;
        }
        let k = row - block.first_row;
        let column = offset - index.span(row).start;
        let before: usize = removed[..k].iter().sum();
        offset - before - column.min(removed[k])
    };

    let after = Selection::new(map(selection.start()), map(selection.end()));
    Some(replace_op(buffer, block.range(), dedented, selection, after))
}
