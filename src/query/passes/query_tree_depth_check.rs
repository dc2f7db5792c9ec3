//! 查询树深度检查
//!
//! 深度按递归层数计算，每个节点都会加一，不只是作用域节点。
//! 限制取自当前作用域的设置，因此子查询可以拥有与外层不同的限制。

use crate::core::error::{AnalyzerError, AnalyzerResult};
use crate::query::context::ContextPtr;
use crate::query::tree::{QueryTreeNode, QueryTreeNodePtr};
use crate::query::visitor::{ConstInDepthQueryTreeVisitorWithContext, TraversalState, WithTraversalState};

use super::QueryTreePass;

struct QueryTreeDepthCheckVisitor {
    state: TraversalState,
}

impl WithTraversalState for QueryTreeDepthCheckVisitor {
    fn traversal_state(&self) -> &TraversalState {
        &self.state
    }

    fn traversal_state_mut(&mut self) -> &mut TraversalState {
        &mut self.state
    }
}

impl ConstInDepthQueryTreeVisitorWithContext for QueryTreeDepthCheckVisitor {
    fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
        let limit = self.settings().max_query_tree_depth;
        let depth = self.depth();
        if depth > limit {
            return Err(AnalyzerError::structural(format!(
                "查询树深度 {} 超过限制 {}，节点 {}",
                depth,
                limit,
                node.node_type()
            )));
        }
        Ok(())
    }
}

/// 检查查询树递归深度不超过 `max_query_tree_depth`
pub struct QueryTreeDepthCheckPass;

impl QueryTreePass for QueryTreeDepthCheckPass {
    fn name(&self) -> &'static str {
        "QueryTreeDepthCheck"
    }

    fn description(&self) -> &'static str {
        "Reject query trees deeper than max_query_tree_depth"
    }

    fn run(&self, tree: &mut QueryTreeNodePtr, context: ContextPtr) -> AnalyzerResult<()> {
        let mut visitor = QueryTreeDepthCheckVisitor {
            state: TraversalState::new(context),
        };
        visitor.traverse(&**tree)
    }
}
