//! 函数名规范化
//!
//! 在 `normalize_function_names` 开启的作用域内把函数名转为小写。
//! 表函数中未解析的参数不会被改写。

use std::sync::Arc;

use crate::core::error::AnalyzerResult;
use crate::query::context::ContextPtr;
use crate::query::tree::{QueryTreeNode, QueryTreeNodePtr};
use crate::query::visitor::{QueryTreeRuleVisitor, TraversalOrder, TraversalState, WithTraversalState};

use super::QueryTreePass;

struct NormalizeFunctionNamesVisitor {
    state: TraversalState,
    normalized: usize,
}

impl WithTraversalState for NormalizeFunctionNamesVisitor {
    fn traversal_state(&self) -> &TraversalState {
        &self.state
    }

    fn traversal_state_mut(&mut self) -> &mut TraversalState {
        &mut self.state
    }
}

impl QueryTreeRuleVisitor for NormalizeFunctionNamesVisitor {
    const TRAVERSAL_ORDER: TraversalOrder = TraversalOrder::TopDown;

    fn is_applicable(&mut self, node: &QueryTreeNode) -> bool {
        if !self.settings().normalize_function_names {
            return false;
        }
        node.as_function()
            .map(|function| function.name.chars().any(char::is_uppercase))
            .unwrap_or(false)
    }

    fn apply(&mut self, node: &mut QueryTreeNodePtr) -> AnalyzerResult<()> {
        if let Some(function) = Arc::make_mut(node).as_function_mut() {
            function.name = function.name.to_lowercase();
            self.normalized += 1;
        }
        Ok(())
    }
}

/// 函数名转小写
pub struct NormalizeFunctionNamesPass;

impl QueryTreePass for NormalizeFunctionNamesPass {
    fn name(&self) -> &'static str {
        "NormalizeFunctionNames"
    }

    fn description(&self) -> &'static str {
        "Lower-case function names where normalize_function_names is enabled"
    }

    fn run(&self, tree: &mut QueryTreeNodePtr, context: ContextPtr) -> AnalyzerResult<()> {
        let mut visitor = NormalizeFunctionNamesVisitor {
            state: TraversalState::new(context),
            normalized: 0,
        };
        visitor.traverse(tree)?;
        log::trace!("规范化了 {} 个函数名", visitor.normalized);
        Ok(())
    }
}
