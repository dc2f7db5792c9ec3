//! 规则应用访问器
//!
//! 优化 pass 的通用形态：对每个节点先判断 `is_applicable`，成立时再调用 `apply`。
//! 遍历顺序由 pass 类型在定义时通过 `TRAVERSAL_ORDER` 固定。
//! 上下文与深度的跟踪方式和 `InDepthQueryTreeVisitorWithContext` 完全一致。
//!
//! 框架内置结构性跳过规则：表函数节点中尚未解析的参数槽位不会被遍历，
//! 所有 pass 都不会看到这些占位表达式及其子树。

use crate::core::error::AnalyzerResult;
use crate::query::tree::{visit_child_mut, QueryTreeNode, QueryTreeNodePtr};

use super::context_visitor::{TraversalScopeGuard, WithTraversalState};
use super::in_depth_visitor::TraversalOrder;

/// 判断父节点的第 `index` 个子树是否被结构性跳过
pub fn should_skip_subtree(parent: &QueryTreeNode, index: usize) -> bool {
    parent
        .as_table_function()
        .map(|table_function| table_function.is_unresolved_argument(index))
        .unwrap_or(false)
}

/// 规则应用访问器
pub trait QueryTreeRuleVisitor: WithTraversalState {
    const TRAVERSAL_ORDER: TraversalOrder;

    fn is_applicable(&mut self, node: &QueryTreeNode) -> bool;

    /// 仅在 `is_applicable` 返回 true 时调用
    fn apply(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>;

    fn traverse(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        let mut scope = TraversalScopeGuard::enter(self, &**node);
        let visitor = &mut *scope;

        if Self::TRAVERSAL_ORDER == TraversalOrder::BottomUp {
            visitor.traverse_children(node)?;
        }

        if visitor.is_applicable(node) {
            visitor.apply(node)?;
        }

        if Self::TRAVERSAL_ORDER == TraversalOrder::TopDown {
            visitor.traverse_children(node)?;
        }
        Ok(())
    }

    fn traverse_children(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        for index in 0..node.children().len() {
            if node.child(index).is_none() || should_skip_subtree(&**node, index) {
                continue;
            }

            visit_child_mut(node, index, |child| self.traverse(child))?;
        }
        Ok(())
    }
}
