//! 查询树 pass 模块
//!
//! 每个 pass 是一次完整的查询树分析或重写，由 `QueryTreePassManager` 按顺序执行。

mod normalize_function_names;
mod pass_manager;
mod query_tree_depth_check;

pub use normalize_function_names::NormalizeFunctionNamesPass;
pub use pass_manager::{create_default_pass_manager, QueryTreePass, QueryTreePassManager};
pub use query_tree_depth_check::QueryTreeDepthCheckPass;
