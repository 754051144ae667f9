use super::replace_op;
use crate::models::word::{is_word_char, word_end, word_start};
use crate::models::{EditOp, Selection, TextBuffer};

/// 选区所在的单词区间；选区不接触任何单词时返回 None
fn current_word(buffer: &TextBuffer, selection: Selection) -> Option<(usize, usize)> {
    let rope = buffer.rope();
    let start = word_start(rope, selection.start());
    let end = word_end(rope, selection.end());
    (start < end).then_some((start, end))
}

/// 与左侧相邻单词交换位置，选区跟随被移动的单词
pub fn move_word_left(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    let (start, end) = current_word(buffer, selection)?;
    let rope = buffer.rope();

    let mut chars = rope.chars_at(start);
    let mut gap_start = start;
    while let Some(c) = chars.prev() {
        if is_word_char(c) {
            break;
        }
        gap_start -= 1;
    }
    if gap_start == 0 {
        return None;
    }
    let prev_start = word_start(rope, gap_start);

    let inserted = format!(
        "{}{}{}",
        buffer.slice(start..end),
        buffer.slice(gap_start..start),
        buffer.slice(prev_start..gap_start)
    );
    let after = selection.shifted(-((start - prev_start) as isize));
    Some(replace_op(buffer, prev_start..end, inserted, selection, after))
}

/// 与右侧相邻单词交换位置，选区跟随被移动的单词
pub fn move_word_right(buffer: &TextBuffer, selection: Selection) -> Option<EditOp> {
    let (start, end) = current_word(buffer, selection)?;
    let rope = buffer.rope();

    let gap_end = end + rope.chars_at(end).take_while(|&c| !is_word_char(c)).count();
    if gap_end >= rope.len_chars() {
        return None;
    }
    let next_end = word_end(rope, gap_end);

    let inserted = format!(
        "{}{}{}",
        buffer.slice(gap_end..next_end),
        buffer.slice(end..gap_end),
        buffer.slice(start..end)
    );
    let after = selection.shifted((next_end - end) as isize);
    Some(replace_op(buffer, start..next_end, inserted, selection, after))
}
