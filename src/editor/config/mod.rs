//! 编辑器配置
//!
//! 包含：
//! - 缩进风格（Tab / 空格）
//! - Tab 宽度

pub mod config;

// 重新导出
pub use config::{EditorConfig, IndentStyle, IndentUnit};
