//! JOIN 键类型检查集成测试

use std::sync::Arc;

use query_analyzer::core::error::{AnalyzerError, ErrorCode, ToPublicError};
use query_analyzer::core::types::DataType;
use query_analyzer::query::join::{
    Block, ColumnWithTypeAndName, FullSortingMergeJoin, Join, JoinOnClause, TableJoin,
};

fn join_with(left_key: &str, right_key: &str, right_type: DataType) -> FullSortingMergeJoin {
    let table_join = TableJoin::new(vec![JoinOnClause::new().add_key(left_key, right_key)]);
    let right = Block::new(vec![ColumnWithTypeAndName::new(right_key, right_type)]);
    FullSortingMergeJoin::new(Arc::new(table_join), right)
}

fn left_id() -> Block {
    Block::new(vec![
        ColumnWithTypeAndName::new("id", DataType::Int64),
        ColumnWithTypeAndName::new("name", DataType::String),
    ])
}

#[test]
fn test_nullable_right_key() {
    let join = join_with("id", "id", DataType::nullable(DataType::Int64));
    join.check_types_of_keys(&left_id())
        .expect("nullability alone is not a mismatch");
}

#[test]
fn test_low_cardinality_string_right_key() {
    let join = join_with("id", "id", DataType::low_cardinality(DataType::String));
    let err = join
        .check_types_of_keys(&left_id())
        .expect_err("Int64 and String are incompatible");

    assert!(matches!(err, AnalyzerError::TypeMismatch(_)));
    assert_eq!(err.to_error_code(), ErrorCode::TypeMismatch);
    let message = err.to_public_message();
    assert!(message.contains("id :: Int64"));
    assert!(message.contains("id :: LowCardinality(String)"));
}

#[test]
fn test_low_cardinality_int_right_key() {
    let join = join_with("id", "id", DataType::low_cardinality(DataType::Int64));
    let err = join
        .check_types_of_keys(&left_id())
        .expect_err("matching only after unwrapping is not supported");

    assert!(matches!(err, AnalyzerError::NotImplemented(_)));
    assert_eq!(err.to_error_code(), ErrorCode::NotImplemented);
}

#[test]
fn test_differently_named_keys() {
    let join = join_with("id", "user_id", DataType::nullable(DataType::Int64));
    join.check_types_of_keys(&left_id())
        .expect("key names may differ between sides");

    let mut header = left_id();
    join.join_block(&mut header).expect("header computation");
    assert_eq!(header.dump_names(), "id, name, user_id");
    assert_eq!(header.rows(), 0);
}

#[test]
fn test_trait_object_dispatch() {
    let join: Box<dyn Join> = Box::new(join_with("id", "id", DataType::Int64));
    assert_eq!(join.table_join().clauses().len(), 1);
    assert!(join.check_types_of_keys(&left_id()).is_ok());

    let err = join.total_row_count().expect_err("execution only");
    // 内部错误对外只给出默认信息
    assert_eq!(
        err.to_public_message(),
        ErrorCode::LogicalError.default_message()
    );
}
