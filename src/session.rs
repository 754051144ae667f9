//! 编辑会话：宿主调用的唯一入口
//!
//! 一个会话独占一个 TextBuffer 与当前选区，只在宿主的 UI 线程上使用。
//! 渲染、滚动位置与撤销分组都由宿主负责；每次修改返回的 EditOp
//! 可以直接放进宿主自己的撤销栈。

use crate::editor::config::EditorConfig;
use crate::editor::transform::{self, TransformKind};
use crate::models::{EditOp, Selection, SelectionSpan, TextBuffer};
use crate::services::search::{self, FindOutcome, Match, SearchContext, SearchDirection};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub changed: bool,
    pub selection: Selection,
    pub op: Option<EditOp>,
}

impl EditOutcome {
    fn unchanged(selection: Selection) -> Self {
        Self {
            changed: false,
            selection,
            op: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    buffer: TextBuffer,
    selection: Selection,
}

impl EditorSession {
    pub fn new(content: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(content),
            selection: Selection::default(),
        }
    }

    /// 重新载入内容，选区回到文首
    pub fn initialize(&mut self, content: &str) {
        self.buffer.set_text(content);
        self.selection = Selection::default();
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn version(&self) -> u64 {
        self.buffer.version()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.buffer.len_chars());
    }

    pub fn resolve(&self, offset: usize) -> (usize, usize) {
        self.buffer.resolve(offset)
    }

    pub fn selection_span(&self) -> SelectionSpan {
        self.buffer.selection_span(self.selection)
    }

    /// 应用一次选区变换；无事可做或内部出错时保持原状
    pub fn apply_transform(
        &mut self,
        kind: TransformKind,
        selection: Selection,
        config: &EditorConfig,
    ) -> EditOutcome {
        self.set_selection(selection);
        let selection = self.selection;

        let computed = catch_unwind(AssertUnwindSafe(|| {
            transform::apply(kind, &self.buffer, selection, config)
        }));
        let op = match computed {
            Ok(Some(op)) => op,
            Ok(None) => return EditOutcome::unchanged(selection),
            Err(_) => {
                tracing::error!(transform = kind.name(), ?selection, "transform failed; ignored");
                return EditOutcome::unchanged(selection);
            }
        };

        self.commit(op, kind.name())
    }

    pub fn find(
        &mut self,
        context: &SearchContext,
        from: usize,
        direction: SearchDirection,
        stop_at_boundary: bool,
    ) -> search::Result<FindOutcome> {
        let outcome = {
            let text = self.buffer.as_cow();
            search::find(&text, context, from, direction, stop_at_boundary)?
        };
        if outcome.found() {
            self.selection = outcome.selection();
        }
        Ok(outcome)
    }

    pub fn find_all(&self, context: &SearchContext) -> search::Result<Vec<Match>> {
        search::find_all(&self.buffer.as_cow(), context)
    }

    /// 从当前选区起点开始替换下一个命中，光标落在插入文本之后
    pub fn replace_one(
        &mut self,
        context: &SearchContext,
        replacement: &str,
    ) -> search::Result<EditOutcome> {
        let selection = self.selection;
        let found = {
            let text = self.buffer.as_cow();
            search::replace_one(&text, context, selection.start(), replacement)?
        };
        let Some(found) = found else {
            return Ok(EditOutcome::unchanged(selection.collapse_to_end()));
        };

        let after = Selection::caret(found.caret());
        let deleted = self.buffer.slice(found.range.clone());
        let op = EditOp::replace(found.range.start, deleted, found.text, selection, after);
        Ok(self.commit(op, "replaceOne"))
    }

    /// 全部替换后选区折叠到文末
    pub fn replace_all(
        &mut self,
        context: &SearchContext,
        replacement: &str,
    ) -> search::Result<EditOutcome> {
        let selection = self.selection;
        let (original, replaced) = {
            let text = self.buffer.as_cow();
            let replaced = search::replace_all(&text, context, replacement)?;
            (text.into_owned(), replaced)
        };
        let Some(replaced) = replaced else {
            return Ok(EditOutcome::unchanged(selection));
        };

        let after = Selection::caret(replaced.chars().count());
        let op = EditOp::replace(0, original, replaced, selection, after);
        Ok(self.commit(op, "replaceAll"))
    }

    /// 把宿主撤销栈里的操作重新作用到缓冲区
    ///
    /// 操作与当前文本不一致时缓冲区和选区都不变，返回 false。
    pub fn apply_op(&mut self, op: &EditOp) -> bool {
        if !self.buffer.apply(op) {
            return false;
        }
        self.set_selection(op.selection_after);
        true
    }

    fn commit(&mut self, op: EditOp, label: &'static str) -> EditOutcome {
        if !self.buffer.apply(&op) {
            return EditOutcome::unchanged(self.selection);
        }
        self.set_selection(op.selection_after);
        tracing::debug!(
            op = label,
            id = %op.id,
            start = op.start,
            version = self.buffer.version(),
            "edit applied"
        );
        EditOutcome {
            changed: true,
            selection: self.selection,
            op: Some(op),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
