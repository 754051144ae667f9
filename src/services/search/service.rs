//! 查找 / 替换服务
//!
//! 每次调用都是一次完整的 Idle -> 操作 -> Idle，除调用方传入的
//! SearchContext 与位置外不保存任何状态。

use super::searcher::{Match, Result, SearchContext, Searcher};
use crate::models::Selection;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    Found(Selection),
    /// 未找到：光标停在原处
    NotFound(Selection),
}

impl FindOutcome {
    pub fn found(&self) -> bool {
        matches!(self, FindOutcome::Found(_))
    }

    pub fn selection(&self) -> Selection {
        match self {
            FindOutcome::Found(sel) | FindOutcome::NotFound(sel) => *sel,
        }
    }
}

/// 单次替换的结果：被替换的字符区间与实际插入的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range<usize>,
    pub text: String,
}

impl Replacement {
    /// 插入文本之后的光标位置
    pub fn caret(&self) -> usize {
        self.range.start + self.text.chars().count()
    }
}

fn compile(context: &SearchContext) -> Result<Searcher> {
    Searcher::compile(context).inspect_err(|e| {
        tracing::warn!(pattern = %context.pattern, error = %e, "search pattern rejected");
    })
}

/// 从 from 向后查找；stop_at_eof 为 false 时未命中则从文首重试
pub fn find_next(
    text: &str,
    context: &SearchContext,
    from: usize,
    stop_at_eof: bool,
) -> Result<FindOutcome> {
    let from = from.min(text.chars().count());
    if context.pattern.is_empty() {
        return Ok(FindOutcome::NotFound(Selection::caret(from)));
    }
    let searcher = compile(context)?;

    let hit = searcher.find_forward(text, from).or_else(|| {
        if stop_at_eof || from == 0 {
            None
        } else {
            searcher.find_forward(text, 0)
        }
    });

    tracing::debug!(from, found = hit.is_some(), regex = searcher.is_regex(), "find next");
    Ok(match hit {
        Some(range) => FindOutcome::Found(Selection::new(range.start, range.end)),
        None => FindOutcome::NotFound(Selection::caret(from)),
    })
}

/// 查找结束位置不晚于 before 的上一个命中；未命中则从文末重试
pub fn find_previous(
    text: &str,
    context: &SearchContext,
    before: usize,
    stop_at_bof: bool,
) -> Result<FindOutcome> {
    let len = text.chars().count();
    let before = before.min(len);
    if context.pattern.is_empty() {
        return Ok(FindOutcome::NotFound(Selection::caret(before)));
    }
    let searcher = compile(context)?;

    let hit = searcher.find_backward(text, before).or_else(|| {
        if stop_at_bof || before == len {
            None
        } else {
            searcher.find_backward(text, len)
        }
    });

    tracing::debug!(before, found = hit.is_some(), regex = searcher.is_regex(), "find previous");
    Ok(match hit {
        Some(range) => FindOutcome::Found(Selection::new(range.start, range.end)),
        None => FindOutcome::NotFound(Selection::caret(before)),
    })
}

pub fn find(
    text: &str,
    context: &SearchContext,
    from: usize,
    direction: SearchDirection,
    stop_at_boundary: bool,
) -> Result<FindOutcome> {
    match direction {
        SearchDirection::Forward => find_next(text, context, from, stop_at_boundary),
        SearchDirection::Backward => find_previous(text, context, from, stop_at_boundary),
    }
}

/// 从 from 起找下一个命中（不回绕）并给出替换内容
///
/// 调用方通常传入当前选区起点，这样已选中的命中会被直接替换。
pub fn replace_one(
    text: &str,
    context: &SearchContext,
    from: usize,
    replacement: &str,
) -> Result<Option<Replacement>> {
    if context.pattern.is_empty() {
        return Ok(None);
    }
    let searcher = compile(context)?;
    let from = from.min(text.chars().count());

    Ok(searcher.find_forward(text, from).map(|range| {
        let expanded = searcher.expand_replacement(text, range.clone(), replacement);
        Replacement {
            range,
            text: expanded,
        }
    }))
}

/// 全部替换；没有任何命中时返回 None
pub fn replace_all(
    text: &str,
    context: &SearchContext,
    replacement: &str,
) -> Result<Option<String>> {
    if context.pattern.is_empty() {
        return Ok(None);
    }
    let searcher = compile(context)?;
    let replaced = searcher.replace_all(text, replacement);
    tracing::debug!(replaced = replaced.is_some(), regex = searcher.is_regex(), "replace all");
    Ok(replaced)
}

pub fn find_all(text: &str, context: &SearchContext) -> Result<Vec<Match>> {
    if context.pattern.is_empty() {
        return Ok(Vec::new());
    }
    Ok(compile(context)?.find_all(text))
}

pub fn count_matches(text: &str, context: &SearchContext) -> Result<usize> {
    Ok(find_all(text, context)?.len())
}

#[cfg(test)]
#[path = "../../../tests/unit/services/search/service.rs"]
mod tests;
