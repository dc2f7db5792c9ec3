//! 列数据类型
//!
//! 只覆盖分析阶段需要比较的类型。`Nullable` 与 `LowCardinality`
//! 是包装类型，连接键类型检查会在比较前剥离它们。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 列数据类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Date,
    DateTime,
    Nullable(Box<DataType>),
    LowCardinality(Box<DataType>),
    Array(Box<DataType>),
}

impl DataType {
    pub fn nullable(inner: DataType) -> Self {
        DataType::Nullable(Box::new(inner))
    }

    pub fn low_cardinality(inner: DataType) -> Self {
        DataType::LowCardinality(Box::new(inner))
    }

    pub fn array(inner: DataType) -> Self {
        DataType::Array(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, DataType::Nullable(_))
    }

    pub fn is_low_cardinality(&self) -> bool {
        matches!(self, DataType::LowCardinality(_))
    }

    /// 剥离最外层的 `Nullable`
    pub fn remove_nullable(&self) -> &DataType {
        match self {
            DataType::Nullable(inner) => inner.as_ref(),
            other => other,
        }
    }

    /// 递归剥离所有层级的 `LowCardinality`
    pub fn recursive_remove_low_cardinality(&self) -> DataType {
        match self {
            DataType::LowCardinality(inner) => inner.recursive_remove_low_cardinality(),
            DataType::Nullable(inner) => DataType::nullable(inner.recursive_remove_low_cardinality()),
            DataType::Array(inner) => DataType::array(inner.recursive_remove_low_cardinality()),
            other => other.clone(),
        }
    }

    /// 类型名称，例如 `LowCardinality(Nullable(String))`
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::UInt8 => write!(f, "UInt8"),
            DataType::UInt16 => write!(f, "UInt16"),
            DataType::UInt32 => write!(f, "UInt32"),
            DataType::UInt64 => write!(f, "UInt64"),
            DataType::Int8 => write!(f, "Int8"),
            DataType::Int16 => write!(f, "Int16"),
            DataType::Int32 => write!(f, "Int32"),
            DataType::Int64 => write!(f, "Int64"),
            DataType::Float32 => write!(f, "Float32"),
            DataType::Float64 => write!(f, "Float64"),
            DataType::String => write!(f, "String"),
            DataType::Date => write!(f, "Date"),
            DataType::DateTime => write!(f, "DateTime"),
            DataType::Nullable(inner) => write!(f, "Nullable({})", inner),
            DataType::LowCardinality(inner) => write!(f, "LowCardinality({})", inner),
            DataType::Array(inner) => write!(f, "Array({})", inner),
        }
    }
}
