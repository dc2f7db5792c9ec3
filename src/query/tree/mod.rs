//! 查询树模块

pub mod node;

pub use node::{
    visit_child_mut, ColumnNode, ConstantNode, FunctionNode, IdentifierNode, QueryNode, QueryTreeNode,
    QueryTreeNodeKind, QueryTreeNodePtr, QueryTreeNodeType, QueryTreeNodes, TableFunctionNode,
    TableNode, UnionMode, UnionNode,
};
