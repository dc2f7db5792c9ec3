//! 条件访问器
//!
//! 包装另一个访问器，只有当条件成立时才把节点交给内部访问器。
//! 条件成立的节点连同整棵子树都由内部访问器遍历，包装器自身不再进入该节点的子节点，
//! 因此任何节点都不会被访问两次。条件不成立时包装器继续向下寻找满足条件的节点。
//!
//! 典型用法是把一个变换限定在查询树的部分节点上，而不修改变换本身：
//!
//! ```ignore
//! let mut rewrite = SomeRewriteVisitor::new();
//! let mut visitor = InDepthQueryTreeConditionalVisitor::new(&mut rewrite, |node: &QueryTreeNode| {
//!     node.node_type() == QueryTreeNodeType::Function
//! });
//! visitor.traverse(&mut tree)?;
//! ```

use crate::core::error::AnalyzerResult;
use crate::query::tree::{QueryTreeNode, QueryTreeNodePtr};

use super::in_depth_visitor::{ConstInDepthQueryTreeVisitor, InDepthQueryTreeVisitor, TraversalOrder};

/// 可修改查询树的条件访问器
pub struct InDepthQueryTreeConditionalVisitor<'a, V, P> {
    visitor: &'a mut V,
    condition: P,
    delegated: bool,
}

impl<'a, V, P> InDepthQueryTreeConditionalVisitor<'a, V, P>
where
    V: InDepthQueryTreeVisitor,
    P: FnMut(&QueryTreeNode) -> bool,
{
    pub fn new(visitor: &'a mut V, condition: P) -> Self {
        Self {
            visitor,
            condition,
            delegated: false,
        }
    }
}

impl<V, P> InDepthQueryTreeVisitor for InDepthQueryTreeConditionalVisitor<'_, V, P>
where
    V: InDepthQueryTreeVisitor,
    P: FnMut(&QueryTreeNode) -> bool,
{
    fn traversal_order(&self) -> TraversalOrder {
        self.visitor.traversal_order()
    }

    fn handle(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()> {
        if (self.condition)(&**node) {
            self.delegated = true;
            return self.visitor.traverse(node);
        }
        Ok(())
    }

    /// 条件在进入子节点之前求值，与内部访问器的遍历顺序无关
    fn traverse(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()> {
        self.delegated = false;
        self.handle(node)?;
        if std::mem::take(&mut self.delegated) {
            return Ok(());
        }
        self.traverse_children(node)
    }
}

/// 只读的条件访问器
pub struct ConstInDepthQueryTreeConditionalVisitor<'a, V, P> {
    visitor: &'a mut V,
    condition: P,
    delegated: bool,
}

impl<'a, V, P> ConstInDepthQueryTreeConditionalVisitor<'a, V, P>
where
    V: ConstInDepthQueryTreeVisitor,
    P: FnMut(&QueryTreeNode) -> bool,
{
    pub fn new(visitor: &'a mut V, condition: P) -> Self {
        Self {
            visitor,
            condition,
            delegated: false,
        }
    }
}

impl<V, P> ConstInDepthQueryTreeVisitor for ConstInDepthQueryTreeConditionalVisitor<'_, V, P>
where
    V: ConstInDepthQueryTreeVisitor,
    P: FnMut(&QueryTreeNode) -> bool,
{
    fn traversal_order(&self) -> TraversalOrder {
        self.visitor.traversal_order()
    }

    fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
        if (self.condition)(node) {
            self.delegated = true;
            return self.visitor.traverse(node);
        }
        Ok(())
    }

    fn traverse(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
        self.delegated = false;
        self.handle(node)?;
        if std::mem::take(&mut self.delegated) {
            return Ok(());
        }
        self.traverse_children(node)
    }
}
