//! 集成测试共享工具模块
//!
//! 提供查询树构造函数和记录遍历过程的访问器

#![allow(dead_code)]

use query_analyzer::core::error::{AnalyzerError, AnalyzerResult};
use query_analyzer::query::context::{ContextPtr, QueryContext};
use query_analyzer::query::tree::{QueryTreeNode, QueryTreeNodeKind, QueryTreeNodePtr};
use query_analyzer::query::visitor::{
    ConstInDepthQueryTreeVisitorWithContext, TraversalOrder, TraversalState, WithTraversalState,
};

pub fn ident(name: &str) -> QueryTreeNodePtr {
    QueryTreeNode::identifier(name).into_ptr()
}

pub fn function(name: &str, arguments: Vec<QueryTreeNodePtr>) -> QueryTreeNodePtr {
    QueryTreeNode::function(name, arguments).into_ptr()
}

pub fn scope(context: &ContextPtr, children: Vec<QueryTreeNodePtr>) -> QueryTreeNodePtr {
    QueryTreeNode::query(context.clone(), children.into_iter().map(Some).collect()).into_ptr()
}

pub fn new_context() -> ContextPtr {
    QueryContext::default().into_ptr()
}

/// 节点的可读标签：标识符和函数取名称，其余取节点类型
pub fn label(node: &QueryTreeNode) -> String {
    match node.kind() {
        QueryTreeNodeKind::Identifier(identifier) => identifier.name.clone(),
        QueryTreeNodeKind::Function(function) => function.name.clone(),
        QueryTreeNodeKind::TableFunction(table_function) => table_function.name.clone(),
        _ => node.node_type().to_string(),
    }
}

/// 单次 handle 或 leave 调用时观察到的状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub label: String,
    pub context_id: u64,
    pub depth: usize,
}

/// 记录每次调用时的上下文和深度，遇到 `fail_on` 标签时返回结构错误
pub struct ContextRecorder {
    state: TraversalState,
    pub order: TraversalOrder,
    pub fail_on: Option<String>,
    pub handled: Vec<Observation>,
    pub left: Vec<Observation>,
}

impl ContextRecorder {
    pub fn new(context: ContextPtr) -> Self {
        Self::with_initial_depth(context, 0)
    }

    pub fn with_initial_depth(context: ContextPtr, depth: usize) -> Self {
        Self {
            state: TraversalState::with_initial_depth(context, depth),
            order: TraversalOrder::TopDown,
            fail_on: None,
            handled: Vec::new(),
            left: Vec::new(),
        }
    }

    pub fn fail_on(mut self, label: &str) -> Self {
        self.fail_on = Some(label.to_string());
        self
    }

    fn observe(&self, node: &QueryTreeNode) -> Observation {
        Observation {
            label: label(node),
            context_id: self.context().id(),
            depth: self.depth(),
        }
    }

    pub fn handled_context_ids(&self) -> Vec<u64> {
        self.handled.iter().map(|observation| observation.context_id).collect()
    }

    pub fn handled_labels(&self) -> Vec<String> {
        self.handled.iter().map(|observation| observation.label.clone()).collect()
    }
}

impl WithTraversalState for ContextRecorder {
    fn traversal_state(&self) -> &TraversalState {
        &self.state
    }

    fn traversal_state_mut(&mut self) -> &mut TraversalState {
        &mut self.state
    }
}

impl ConstInDepthQueryTreeVisitorWithContext for ContextRecorder {
    fn traversal_order(&self) -> TraversalOrder {
        self.order
    }

    fn handle(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
        let observation = self.observe(node);
        if self.fail_on.as_deref() == Some(observation.label.as_str()) {
            return Err(AnalyzerError::structural(format!(
                "unexpected node {}",
                observation.label
            )));
        }
        self.handled.push(observation);
        Ok(())
    }

    fn leave(&mut self, node: &QueryTreeNode) -> AnalyzerResult<()> {
        let observation = self.observe(node);
        self.left.push(observation);
        Ok(())
    }
}
