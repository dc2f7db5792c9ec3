//! 深度优先查询树访问器
//!
//! 实现者只需提供 `handle`，另外可以通过 `traversal_order` 选择先处理父节点还是子节点，
//! 通过 `should_visit_child` 决定是否进入某个子节点。`traverse` 与 `traverse_children`
//! 是框架提供的驱动方法，实现者不应重写。
//!
//! ```ignore
//! struct CollectFunctionNames(Vec<String>);
//!
//! impl ConstInDepthQueryTreeVisitor for CollectFunctionNames {
//!     fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
//!         if let Some(function) = node.as_function() {
//!             self.0.push(function.name.clone());
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::core::error::AnalyzerResult;
use crate::query::tree::{visit_child_mut, QueryTreeNode, QueryTreeNodePtr};

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// 先处理父节点，再进入子节点
    #[default]
    TopDown,
    /// 先进入子节点，再处理父节点
    BottomUp,
}

/// 可修改查询树的深度优先访问器
pub trait InDepthQueryTreeVisitor {
    fn traversal_order(&self) -> TraversalOrder {
        TraversalOrder::TopDown
    }

    /// 是否进入子节点，空槽位不会调用此方法
    fn should_visit_child(&mut self, _parent: &QueryTreeNode, _child: &QueryTreeNode) -> bool {
        true
    }

    /// 处理单个节点，可以原地修改或整体替换节点
    fn handle(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>;

    fn traverse(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        let order = self.traversal_order();
        if order == TraversalOrder::BottomUp {
            self.traverse_children(node)?;
        }

        self.handle(node)?;

        if order == TraversalOrder::TopDown {
            self.traverse_children(node)?;
        }
        Ok(())
    }

    fn traverse_children(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        for index in 0..node.children().len() {
            let need_visit_child = match node.child(index) {
                Some(child) => self.should_visit_child(&**node, child),
                None => continue,
            };

            if need_visit_child {
                visit_child_mut(node, index, |child| self.traverse(child))?;
            }
        }
        Ok(())
    }
}

/// 只读的深度优先访问器
///
/// 不修改查询树，多个实例可以在不同线程中同时遍历同一棵共享树。
pub trait ConstInDepthQueryTreeVisitor {
    fn traversal_order(&self) -> TraversalOrder {
        TraversalOrder::TopDown
    }

    fn should_visit_child(&mut self, _parent: &QueryTreeNode, _child: &QueryTreeNode) -> bool {
        true
    }

    fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()>;

    fn traverse(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        let order = self.traversal_order();
        if order == TraversalOrder::BottomUp {
            self.traverse_children(node)?;
        }

        self.handle(node)?;

        if order == TraversalOrder::TopDown {
            self.traverse_children(node)?;
        }
        Ok(())
    }

    fn traverse_children(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        for child in node.children().iter().flatten() {
            if self.should_visit_child(node, child) {
                self.traverse(child)?;
            }
        }
        Ok(())
    }
}
