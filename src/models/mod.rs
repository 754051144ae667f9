//! 数据模型层

pub mod edit_op;
pub mod line_index;
pub mod selection;
pub mod text_buffer;
pub mod word;

pub use edit_op::{EditOp, OpId};
pub use line_index::{LineIndex, LineSpan, SelectionSpan};
pub use selection::Selection;
pub use text_buffer::{normalize_line_endings, slice_to_cow, TextBuffer};
pub use word::CaseSensitivity;
