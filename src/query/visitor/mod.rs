//! 查询树访问器模块
//! 用于构建查询树分析与重写 pass 的遍历框架

mod conditional_visitor;
mod context_visitor;
mod in_depth_visitor;
mod rule_visitor;

pub use conditional_visitor::{ConstInDepthQueryTreeConditionalVisitor, InDepthQueryTreeConditionalVisitor};
pub use context_visitor::{
    ConstInDepthQueryTreeVisitorWithContext, InDepthQueryTreeVisitorWithContext, TraversalState,
    WithTraversalState,
};
pub use in_depth_visitor::{ConstInDepthQueryTreeVisitor, InDepthQueryTreeVisitor, TraversalOrder};
pub use rule_visitor::{should_skip_subtree, QueryTreeRuleVisitor};
