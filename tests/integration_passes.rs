//! 查询树 pass 集成测试

mod common;

use common::{function, ident, new_context, scope};
use query_analyzer::config::Config;
use query_analyzer::core::error::{AnalyzerError, ErrorCode, ToPublicError};
use query_analyzer::query::context::QueryContext;
use query_analyzer::query::passes::{create_default_pass_manager, QueryTreePassManager};
use query_analyzer::query::passes::{NormalizeFunctionNamesPass, QueryTreeDepthCheckPass};
use query_analyzer::query::tree::{QueryTreeNode, QueryTreeNodePtr};

fn function_names(node: &QueryTreeNode, names: &mut Vec<String>) {
    if let Some(function) = node.as_function() {
        names.push(function.name.clone());
    }
    for child in node.children().iter().flatten() {
        function_names(child, names);
    }
}

/// 嵌套 `levels` 层函数调用
fn nested_calls(levels: usize) -> QueryTreeNodePtr {
    (0..levels).fold(ident("x"), |inner, _| function("Abs", vec![inner]))
}

#[test]
fn test_default_pass_manager() {
    let context = Config::default().create_context();
    let manager = create_default_pass_manager(context.clone());

    assert_eq!(manager.passes().len(), 2);
    assert_eq!(
        manager.dump(),
        "1. QueryTreeDepthCheck - Reject query trees deeper than max_query_tree_depth\n\
         2. NormalizeFunctionNames - Lower-case function names where normalize_function_names is enabled\n"
    );

    let mut tree = scope(&context, vec![function("Plus", vec![ident("a"), function("MAX", vec![ident("b")])])]);
    manager.run(&mut tree).expect("passes should succeed");

    let mut names = Vec::new();
    function_names(&tree, &mut names);
    assert_eq!(names, vec!["plus", "max"]);
}

#[test]
fn test_depth_limit_from_nested_scope() {
    let mut config = Config::default();
    config.settings.max_query_tree_depth = 100;
    let root = config.create_context();
    let strict = QueryContext::create_copy_with(&root, |settings| {
        settings.max_query_tree_depth = 4;
    })
    .into_ptr();

    // 外层作用域内 5 层嵌套没有问题
    let mut tree = scope(&root, vec![nested_calls(5)]);
    let mut manager = QueryTreePassManager::new(root.clone());
    manager.add_pass(Box::new(QueryTreeDepthCheckPass));
    manager.run(&mut tree).expect("depth within limit");

    // 同样的嵌套放进限制更严格的子查询
    let mut tree = scope(&root, vec![scope(&strict, vec![nested_calls(5)])]);
    let err = manager.run(&mut tree).expect_err("depth limit exceeded");
    assert!(matches!(err, AnalyzerError::Structural(_)));
    assert_eq!(err.to_error_code(), ErrorCode::InvalidQueryTree);
}

#[test]
fn test_failing_pass_stops_pipeline() {
    let mut config = Config::default();
    config.settings.max_query_tree_depth = 3;
    let context = config.create_context();
    let manager = create_default_pass_manager(context.clone());

    let mut tree = scope(&context, vec![nested_calls(4)]);
    let snapshot = tree.clone();
    assert!(manager.run(&mut tree).is_err());

    // 规范化 pass 没有执行，树未被复制
    assert!(std::sync::Arc::ptr_eq(&tree, &snapshot));
}

#[test]
fn test_run_up_to() {
    let context = new_context();
    let mut manager = QueryTreePassManager::new(context.clone());
    manager.add_pass(Box::new(NormalizeFunctionNamesPass));

    let mut tree = scope(&context, vec![function("Lower", Vec::new())]);
    manager.run_up_to(&mut tree, 0).expect("no pass executed");
    let mut names = Vec::new();
    function_names(&tree, &mut names);
    assert_eq!(names, vec!["Lower"]);

    let err = manager.run_up_to(&mut tree, 2).expect_err("only one pass registered");
    assert!(matches!(err, AnalyzerError::Logical(_)));
    assert_eq!(err.to_error_code(), ErrorCode::LogicalError);
}

#[test]
fn test_no_op_pipeline_keeps_tree_shared() {
    let context = new_context();
    let manager = create_default_pass_manager(context.clone());

    let mut tree = scope(&context, vec![function("plus", vec![ident("a"), function("abs", vec![ident("b")])])]);
    let snapshot = tree.clone();
    manager.run(&mut tree).expect("passes should succeed");

    assert!(std::sync::Arc::ptr_eq(&tree, &snapshot));
    let first = tree.child(0).expect("slot 0 exists");
    let old_first = snapshot.child(0).expect("slot 0 exists");
    assert!(std::sync::Arc::ptr_eq(first, old_first));
}
