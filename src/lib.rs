//! editcore - 编辑器文本核心库
//!
//! 模块结构：
//! - models: 数据模型（TextBuffer, LineIndex, Selection, EditOp, 单词边界）
//! - editor: 编辑器配置与基于选区的文本变换
//! - services: 查找 / 替换
//! - session: 宿主调用入口（EditorSession）
//! - logging: tracing 初始化

pub mod editor;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;

pub use editor::{EditorConfig, IndentStyle, IndentUnit, TransformKind};
pub use models::{EditOp, Selection, SelectionSpan, TextBuffer};
pub use services::search::{FindOutcome, Match, SearchContext, SearchDirection, SearchError};
pub use session::{EditOutcome, EditorSession};
