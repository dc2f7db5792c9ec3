//! 带作用域上下文的深度优先访问器
//!
//! 在 `in_depth_visitor` 的基础上维护遍历状态：当前上下文和递归深度。
//! 进入作用域节点（查询、并集）时切换为节点自带的上下文；每进入一个节点深度加一。
//! 离开节点时无论正常返回、错误返回还是 panic 展开，都会恢复进入前的状态，
//! 子树中的上下文切换不会泄漏到父节点。

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::core::error::AnalyzerResult;
use crate::query::context::{ContextPtr, Settings};
use crate::query::tree::{visit_child_mut, QueryTreeNode, QueryTreeNodePtr};

use super::in_depth_visitor::TraversalOrder;

/// 遍历状态
#[derive(Debug, Clone)]
pub struct TraversalState {
    context: ContextPtr,
    depth: usize,
}

impl TraversalState {
    pub fn new(context: ContextPtr) -> Self {
        Self::with_initial_depth(context, 0)
    }

    pub fn with_initial_depth(context: ContextPtr, initial_depth: usize) -> Self {
        Self {
            context,
            depth: initial_depth,
        }
    }

    pub fn context(&self) -> &ContextPtr {
        &self.context
    }

    pub fn settings(&self) -> &Settings {
        self.context.settings()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// 进入节点，返回进入前的状态
    fn enter(&mut self, node: &QueryTreeNode) -> TraversalState {
        let saved = self.clone();
        if let Some(context) = node.scope_context() {
            log::trace!(
                "进入作用域节点 {}，上下文 {} -> {}",
                node.node_type(),
                self.context.id(),
                context.id()
            );
            self.context = Arc::clone(context);
        }
        self.depth += 1;
        saved
    }
}

/// 暴露遍历状态的访问器
///
/// 访问器只需要返回自身持有的 `TraversalState`，
/// `context`、`settings`、`depth` 只在遍历进行中才有意义。
pub trait WithTraversalState {
    fn traversal_state(&self) -> &TraversalState;

    fn traversal_state_mut(&mut self) -> &mut TraversalState;

    fn context(&self) -> &ContextPtr {
        self.traversal_state().context()
    }

    fn settings(&self) -> &Settings {
        self.traversal_state().settings()
    }

    fn depth(&self) -> usize {
        self.traversal_state().depth()
    }
}

/// RAII 风格的作用域守卫
///
/// 创建时记录访问器的遍历状态并进入节点，Drop 时恢复记录的状态。
/// 守卫解引用为访问器本身，遍历期间通过守卫调用访问器的方法。
pub(crate) struct TraversalScopeGuard<'a, V: WithTraversalState> {
    visitor: &'a mut V,
    saved: TraversalState,
}

impl<'a, V: WithTraversalState> TraversalScopeGuard<'a, V> {
    pub(crate) fn enter(visitor: &'a mut V, node: &QueryTreeNode) -> Self {
        let saved = visitor.traversal_state_mut().enter(node);
        Self { visitor, saved }
    }
}

impl<V: WithTraversalState> Deref for TraversalScopeGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &*self.visitor
    }
}

impl<V: WithTraversalState> DerefMut for TraversalScopeGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut *self.visitor
    }
}

impl<V: WithTraversalState> Drop for TraversalScopeGuard<'_, V> {
    fn drop(&mut self) {
        std::mem::swap(self.visitor.traversal_state_mut(), &mut self.saved);
    }
}

/// 可修改查询树、跟踪作用域上下文的深度优先访问器
pub trait InDepthQueryTreeVisitorWithContext: WithTraversalState {
    fn traversal_order(&self) -> TraversalOrder {
        TraversalOrder::TopDown
    }

    fn should_visit_child(&mut self, _parent: &QueryTreeNode, _child: &QueryTreeNode) -> bool {
        true
    }

    fn handle(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>;

    /// 子树处理完成后调用，此时当前上下文仍是本节点的上下文
    fn leave(&mut self, _node: &mut QueryTreeNodePtr) -> AnalyzerResult<()> {
        Ok(())
    }

    fn traverse(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        let mut scope = TraversalScopeGuard::enter(self, &**node);
        let visitor = &mut *scope;

        let order = visitor.traversal_order();
        if order == TraversalOrder::BottomUp {
            visitor.traverse_children(node)?;
        }

        visitor.handle(node)?;

        if order == TraversalOrder::TopDown {
            visitor.traverse_children(node)?;
        }

        visitor.leave(node)
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

/// 只读、跟踪作用域上下文的深度优先访问器
pub trait ConstInDepthQueryTreeVisitorWithContext: WithTraversalState {
    fn traversal_order(&self) -> TraversalOrder {
        TraversalOrder::TopDown
    }

    fn should_visit_child(&mut self, _parent: &QueryTreeNode, _child: &QueryTreeNode) -> bool {
        true
    }

    fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()>;

    fn leave(&mut self, _node: &QueryTreeNode) -> AnalyzerResult<()> {
        Ok(())
    }

    fn traverse(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()>
    where
        Self: Sized,
    {
        let mut scope = TraversalScopeGuard::enter(self, node);
        let visitor = &mut *scope;

        let order = visitor.traversal_order();
        if order == TraversalOrder::BottomUp {
            visitor.traverse_children(node)?;
        }

        visitor.handle(node)?;

        if order == TraversalOrder::TopDown {
            visitor.traverse_children(node)?;
        }

        visitor.leave(node)
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
