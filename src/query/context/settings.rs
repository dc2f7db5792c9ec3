//! 分析设置
//!
//! 上下文对外暴露的只读设置投影

use serde::{Deserialize, Serialize};

/// 查询分析设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 查询树允许的最大递归深度
    pub max_query_tree_depth: usize,
    /// 是否将函数名统一为小写
    pub normalize_function_names: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_query_tree_depth: 1000,
            normalize_function_names: true,
        }
    }
}
