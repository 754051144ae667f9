//! 编辑器层：配置与基于选区的文本变换

pub mod config;
pub mod transform;

pub use config::{EditorConfig, IndentStyle, IndentUnit};
pub use transform::TransformKind;
