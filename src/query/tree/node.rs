//! 查询树节点
//!
//! 节点拥有有序的子节点槽位，每个槽位可以为空。子节点通过 `Arc` 持有，
//! 既可以独占也可以在多棵树之间共享；可变遍历通过 `visit_child_mut`
//! 写时复制，只在真正被修改的路径上解除共享。

use std::fmt::{self, Write};
use std::sync::Arc;

use crate::core::error::AnalyzerResult;
use crate::core::types::DataType;
use crate::query::context::ContextPtr;

/// 节点共享句柄
pub type QueryTreeNodePtr = Arc<QueryTreeNode>;

/// 子节点槽位列表
pub type QueryTreeNodes = Vec<Option<QueryTreeNodePtr>>;

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTreeNodeType {
    Query,
    Union,
    TableFunction,
    Table,
    Function,
    Column,
    Constant,
    Identifier,
    List,
}

impl fmt::Display for QueryTreeNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryTreeNodeType::Query => "QUERY",
            QueryTreeNodeType::Union => "UNION",
            QueryTreeNodeType::TableFunction => "TABLE_FUNCTION",
            QueryTreeNodeType::Table => "TABLE",
            QueryTreeNodeType::Function => "FUNCTION",
            QueryTreeNodeType::Column => "COLUMN",
            QueryTreeNodeType::Constant => "CONSTANT",
            QueryTreeNodeType::Identifier => "IDENTIFIER",
            QueryTreeNodeType::List => "LIST",
        };
        write!(f, "{}", name)
    }
}

/// 查询作用域节点
#[derive(Debug, Clone)]
pub struct QueryNode {
    pub context: ContextPtr,
}

/// 并集模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnionMode {
    #[default]
    All,
    Distinct,
}

/// 并集作用域节点
#[derive(Debug, Clone)]
pub struct UnionNode {
    pub context: ContextPtr,
    pub mode: UnionMode,
}

/// 表函数节点
///
/// `unresolved_argument_indexes` 中的参数槽位暂时无法解析，
/// 通用遍历不得进入这些子树。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFunctionNode {
    pub name: String,
    pub unresolved_argument_indexes: Vec<usize>,
}

impl TableFunctionNode {
    pub fn is_unresolved_argument(&self, index: usize) -> bool {
        self.unresolved_argument_indexes.contains(&index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNode {
    pub name: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantNode {
    pub value: String,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierNode {
    pub name: String,
}

/// 节点负载
#[derive(Debug, Clone)]
pub enum QueryTreeNodeKind {
    Query(QueryNode),
    Union(UnionNode),
    TableFunction(TableFunctionNode),
    Table(TableNode),
    Function(FunctionNode),
    Column(ColumnNode),
    Constant(ConstantNode),
    Identifier(IdentifierNode),
    List,
}

/// 查询树节点
#[derive(Debug, Clone)]
pub struct QueryTreeNode {
    kind: QueryTreeNodeKind,
    children: QueryTreeNodes,
}

impl QueryTreeNode {
    pub fn new(kind: QueryTreeNodeKind, children: QueryTreeNodes) -> Self {
        Self { kind, children }
    }

    pub fn query(context: ContextPtr, children: QueryTreeNodes) -> Self {
        Self::new(QueryTreeNodeKind::Query(QueryNode { context }), children)
    }

    pub fn union(context: ContextPtr, mode: UnionMode, queries: Vec<QueryTreeNodePtr>) -> Self {
        Self::new(
            QueryTreeNodeKind::Union(UnionNode { context, mode }),
            queries.into_iter().map(Some).collect(),
        )
    }

    pub fn table_function(
        name: impl Into<String>,
        unresolved_argument_indexes: Vec<usize>,
        arguments: QueryTreeNodes,
    ) -> Self {
        Self::new(
            QueryTreeNodeKind::TableFunction(TableFunctionNode {
                name: name.into(),
                unresolved_argument_indexes,
            }),
            arguments,
        )
    }

    pub fn table(name: impl Into<String>) -> Self {
        Self::new(QueryTreeNodeKind::Table(TableNode { name: name.into() }), Vec::new())
    }

    pub fn function(name: impl Into<String>, arguments: Vec<QueryTreeNodePtr>) -> Self {
        Self::new(
            QueryTreeNodeKind::Function(FunctionNode { name: name.into() }),
            arguments.into_iter().map(Some).collect(),
        )
    }

    pub fn column(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(
            QueryTreeNodeKind::Column(ColumnNode {
                name: name.into(),
                data_type,
            }),
            Vec::new(),
        )
    }

    pub fn constant(value: impl Into<String>, data_type: DataType) -> Self {
        Self::new(
            QueryTreeNodeKind::Constant(ConstantNode {
                value: value.into(),
                data_type,
            }),
            Vec::new(),
        )
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(
            QueryTreeNodeKind::Identifier(IdentifierNode { name: name.into() }),
            Vec::new(),
        )
    }

    pub fn list(items: Vec<QueryTreeNodePtr>) -> Self {
        Self::new(QueryTreeNodeKind::List, items.into_iter().map(Some).collect())
    }

    pub fn into_ptr(self) -> QueryTreeNodePtr {
        Arc::new(self)
    }

    pub fn node_type(&self) -> QueryTreeNodeType {
        match &self.kind {
            QueryTreeNodeKind::Query(_) => QueryTreeNodeType::Query,
            QueryTreeNodeKind::Union(_) => QueryTreeNodeType::Union,
            QueryTreeNodeKind::TableFunction(_) => QueryTreeNodeType::TableFunction,
            QueryTreeNodeKind::Table(_) => QueryTreeNodeType::Table,
            QueryTreeNodeKind::Function(_) => QueryTreeNodeType::Function,
            QueryTreeNodeKind::Column(_) => QueryTreeNodeType::Column,
            QueryTreeNodeKind::Constant(_) => QueryTreeNodeType::Constant,
            QueryTreeNodeKind::Identifier(_) => QueryTreeNodeType::Identifier,
            QueryTreeNodeKind::List => QueryTreeNodeType::List,
        }
    }

    pub fn kind(&self) -> &QueryTreeNodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut QueryTreeNodeKind {
        &mut self.kind
    }

    pub fn children(&self) -> &[Option<QueryTreeNodePtr>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut QueryTreeNodes {
        &mut self.children
    }

    /// 获取指定槽位的子节点，槽位为空或越界时返回 `None`
    pub fn child(&self, index: usize) -> Option<&QueryTreeNodePtr> {
        self.children.get(index).and_then(Option::as_ref)
    }

    /// 作用域节点附带的上下文；非作用域节点返回 `None`
    pub fn scope_context(&self) -> Option<&ContextPtr> {
        match &self.kind {
            QueryTreeNodeKind::Query(query) => Some(&query.context),
            QueryTreeNodeKind::Union(union) => Some(&union.context),
            _ => None,
        }
    }

    pub fn is_scope(&self) -> bool {
        self.scope_context().is_some()
    }

    pub fn as_query(&self) -> Option<&QueryNode> {
        match &self.kind {
            QueryTreeNodeKind::Query(query) => Some(query),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionNode> {
        match &self.kind {
            QueryTreeNodeKind::Union(union) => Some(union),
            _ => None,
        }
    }

    pub fn as_table_function(&self) -> Option<&TableFunctionNode> {
        match &self.kind {
            QueryTreeNodeKind::TableFunction(table_function) => Some(table_function),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionNode> {
        match &self.kind {
            QueryTreeNodeKind::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionNode> {
        match &mut self.kind {
            QueryTreeNodeKind::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnNode> {
        match &self.kind {
            QueryTreeNodeKind::Column(column) => Some(column),
            _ => None,
        }
    }

    /// 以缩进文本形式输出整棵子树，用于日志和调试
    pub fn dump_tree(&self) -> String {
        let mut buffer = String::new();
        self.dump_tree_impl(&mut buffer, 0);
        buffer
    }

    fn dump_tree_impl(&self, buffer: &mut String, indent: usize) {
        let _ = write!(buffer, "{:indent$}{}", "", self.node_type(), indent = indent);
        match &self.kind {
            QueryTreeNodeKind::Query(query) => {
                let _ = write!(buffer, " context: {}", query.context.id());
            }
            QueryTreeNodeKind::Union(union) => {
                let _ = write!(buffer, " context: {}, mode: {:?}", union.context.id(), union.mode);
            }
            QueryTreeNodeKind::TableFunction(table_function) => {
                let _ = write!(
                    buffer,
                    " name: {}, unresolved: {:?}",
                    table_function.name, table_function.unresolved_argument_indexes
                );
            }
            QueryTreeNodeKind::Table(table) => {
                let _ = write!(buffer, " name: {}", table.name);
            }
            QueryTreeNodeKind::Function(function) => {
                let _ = write!(buffer, " name: {}", function.name);
            }
            QueryTreeNodeKind::Column(column) => {
                let _ = write!(buffer, " name: {}, type: {}", column.name, column.data_type);
            }
            QueryTreeNodeKind::Constant(constant) => {
                let _ = write!(buffer, " value: {}, type: {}", constant.value, constant.data_type);
            }
            QueryTreeNodeKind::Identifier(identifier) => {
                let _ = write!(buffer, " name: {}", identifier.name);
            }
            QueryTreeNodeKind::List => {}
        }
        buffer.push('\n');

        for child in self.children.iter().flatten() {
            child.dump_tree_impl(buffer, indent + 2);
        }
    }
}

/// 以可变句柄访问指定槽位的子节点，槽位为空时不调用 `visit`
///
/// 父节点独占时直接在原处修改；父节点被共享时在子节点句柄的副本上访问，
/// 只有子节点句柄确实被替换（包括子节点自身被写时复制）才复制父节点并写回。
/// 未修改的共享路径保持共享。
pub fn visit_child_mut<F>(node: &mut QueryTreeNodePtr, index: usize, visit: F) -> AnalyzerResult<()>
where
    F: FnOnce(&mut QueryTreeNodePtr) -> AnalyzerResult<()>,
{
    if let Some(parent) = Arc::get_mut(node) {
        return match parent.children.get_mut(index).and_then(Option::as_mut) {
            Some(child) => visit(child),
            None => Ok(()),
        };
    }

    let mut current = match node.child(index) {
        Some(child) => Arc::clone(child),
        None => return Ok(()),
    };
    let result = visit(&mut current);

    let replaced = node
        .child(index)
        .map(|original| !Arc::ptr_eq(original, &current))
        .unwrap_or(false);
    if replaced {
        if let Some(slot) = Arc::make_mut(node).children.get_mut(index) {
            *slot = Some(current);
        }
    }
    result
}
