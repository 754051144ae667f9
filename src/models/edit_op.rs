use super::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpId {
    pub timestamp: u64,
    pub counter: u16,
}

impl OpId {
    pub fn new() -> Self {
        static COUNTER: std::sync::atomic::AtomicU16 = std::sync::atomic::AtomicU16::new(0);
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self { timestamp, counter }
    }
}

impl Default for OpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpId({:x}:{:04x})", self.timestamp, self.counter)
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{:04x}", self.timestamp, self.counter)
    }
}

/// 一次拼接：删除 [start, start + deleted.len) 并在 start 处插入 inserted
///
/// 偏移均为字符偏移。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub id: OpId,
    pub start: usize,
    pub deleted: String,
    pub inserted: String,
    pub selection_before: Selection,
    pub selection_after: Selection,
}

impl EditOp {
    pub fn replace(
        start: usize,
        deleted: String,
        inserted: String,
        selection_before: Selection,
        selection_after: Selection,
    ) -> Self {
        Self {
            id: OpId::new(),
            start,
            deleted,
            inserted,
            selection_before,
            selection_after,
        }
    }

    pub fn deleted_end(&self) -> usize {
        self.start + self.deleted.chars().count()
    }

    pub fn inserted_end(&self) -> usize {
        self.start + self.inserted.chars().count()
    }

    /// 撤销用的反向操作
    pub fn inverse(&self) -> EditOp {
        EditOp {
            id: OpId::new(),
            start: self.start,
            deleted: self.inserted.clone(),
            inserted: self.deleted.clone(),
            selection_before: self.selection_after,
            selection_after: self.selection_before,
        }
    }

    /// 区间内的文本与 deleted 一致时才可应用
    pub fn matches(&self, rope: &ropey::Rope) -> bool {
        let end = self.deleted_end();
        end <= rope.len_chars() && rope.slice(self.start..end) == self.deleted.as_str()
    }

    /// 作用到 rope 上；操作与当前文本对不上时不做任何修改并返回 false
    pub fn apply(&self, rope: &mut ropey::Rope) -> bool {
        if !self.matches(rope) {
            return false;
        }
        let end = self.deleted_end();
        if end > self.start {
            rope.remove(self.start..end);
        }
        if !self.inserted.is_empty() {
            rope.insert(self.start, &self.inserted);
        }
        true
    }

    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_json_line(line: &str) -> Option<Self> {
        serde_json::from_str(line).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;
