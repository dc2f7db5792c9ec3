//! QueryAnalyzer - 查询树遍历与分析框架
//!
//! 提供查询树的深度优先访问器、按作用域跟踪上下文的访问器、
//! 条件访问器与规则应用访问器，以及构建在其上的分析 pass。

pub mod config;
pub mod core;
pub mod query;
pub mod utils;
