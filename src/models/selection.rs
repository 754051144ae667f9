//! 选区模型：基于字符偏移的 [start, end) 区间

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawSelection")]
pub struct Selection {
    start: usize,
    end: usize,
}

/// 反序列化的中间形态，经 Selection::new 重新排序两端
#[derive(Deserialize)]
struct RawSelection {
    start: usize,
    end: usize,
}

impl From<RawSelection> for Selection {
    fn from(raw: RawSelection) -> Self {
        Selection::new(raw.start, raw.end)
    }
}

impl Selection {
    /// 构造选区，start/end 顺序无关
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// 把两端限制在 0..=len_chars 内
    pub fn clamped(&self, len_chars: usize) -> Self {
        Self {
            start: self.start.min(len_chars),
            end: self.end.min(len_chars),
        }
    }

    pub fn collapse_to_end(&self) -> Self {
        Self::caret(self.end)
    }

    /// 整体平移，向左越界时停在 0
    pub fn shifted(&self, delta: isize) -> Self {
        let shift = |pos: usize| -> usize {
            if delta >= 0 {
                pos.saturating_add(delta as usize)
            } else {
                pos.saturating_sub(delta.unsigned_abs())
            }
        };
        Self::new(shift(self.start), shift(self.end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
