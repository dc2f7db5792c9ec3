//! 查询树 pass 管理器

use crate::core::error::{AnalyzerError, AnalyzerResult};
use crate::query::context::ContextPtr;
use crate::query::tree::QueryTreeNodePtr;

use super::{NormalizeFunctionNamesPass, QueryTreeDepthCheckPass};

/// 查询树 pass
pub trait QueryTreePass: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// 在整棵查询树上执行，`context` 是树外层的上下文
    fn run(&self, tree: &mut QueryTreeNodePtr, context: ContextPtr) -> AnalyzerResult<()>;
}

/// 按注册顺序执行 pass
pub struct QueryTreePassManager {
    context: ContextPtr,
    passes: Vec<Box<dyn QueryTreePass>>,
}

impl QueryTreePassManager {
    pub fn new(context: ContextPtr) -> Self {
        Self {
            context,
            passes: Vec::new(),
        }
    }

    pub fn add_pass(&mut self, pass: Box<dyn QueryTreePass>) {
        self.passes.push(pass);
    }

    pub fn passes(&self) -> &[Box<dyn QueryTreePass>] {
        &self.passes
    }

    pub fn context(&self) -> &ContextPtr {
        &self.context
    }

    /// 执行全部 pass，任一 pass 失败时立即返回
    pub fn run(&self, tree: &mut QueryTreeNodePtr) -> AnalyzerResult<()> {
        self.run_passes(tree, self.passes.len())
    }

    /// 只执行前 `up_to_pass_index` 个 pass
    pub fn run_up_to(&self, tree: &mut QueryTreeNodePtr, up_to_pass_index: usize) -> AnalyzerResult<()> {
        if up_to_pass_index > self.passes.len() {
            return Err(AnalyzerError::logical(format!(
                "请求执行前 {} 个 pass，但只注册了 {} 个",
                up_to_pass_index,
                self.passes.len()
            )));
        }
        self.run_passes(tree, up_to_pass_index)
    }

    fn run_passes(&self, tree: &mut QueryTreeNodePtr, count: usize) -> AnalyzerResult<()> {
        for pass in &self.passes[..count] {
            log::debug!("执行查询树 pass: {}", pass.name());
            pass.run(tree, self.context.clone())?;
        }
        Ok(())
    }

    /// 每行输出一个 pass 的序号、名称和描述
    pub fn dump(&self) -> String {
        self.passes
            .iter()
            .enumerate()
            .map(|(index, pass)| format!("{}. {} - {}\n", index + 1, pass.name(), pass.description()))
            .collect()
    }
}

/// 创建带默认 pass 的管理器
pub fn create_default_pass_manager(context: ContextPtr) -> QueryTreePassManager {
    let mut manager = QueryTreePassManager::new(context);
    manager.add_pass(Box::new(QueryTreeDepthCheckPass));
    manager.add_pass(Box::new(NormalizeFunctionNamesPass));
    manager
}
