//! 服务层模块
//!
//! - search: 编辑器内查找与替换

pub mod search;

pub use search::{FindOutcome, SearchContext, SearchDirection, SearchError};
