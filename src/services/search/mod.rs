//! 搜索服务模块
//!
//! - Searcher: 编译好的字面量 / 正则查找器
//! - service: 查找上一个/下一个、替换、全部替换

mod searcher;
mod service;

pub use searcher::{Match, Result, SearchContext, SearchError, Searcher};
pub use service::{
    count_matches, find, find_all, find_next, find_previous, replace_all, replace_one,
    FindOutcome, Replacement, SearchDirection,
};
