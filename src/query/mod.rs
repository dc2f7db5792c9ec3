// 查询树分析模块
//
// - tree: 查询树节点与共享句柄
// - context: 分析上下文与设置
// - visitor: 深度优先遍历框架
// - passes: 基于遍历框架的分析 pass
// - join: JOIN 规划阶段的类型检查

pub mod context;
pub mod join;
pub mod passes;
pub mod tree;
pub mod visitor;

pub use context::{ContextPtr, QueryContext, Settings};
pub use tree::{QueryTreeNode, QueryTreeNodePtr, QueryTreeNodeType};
