//! 数据块表头

use crate::core::error::{AnalyzerError, AnalyzerResult};
use crate::core::types::DataType;

/// 带名称和类型的列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWithTypeAndName {
    pub name: String,
    pub data_type: DataType,
    /// 常量列在物化前只保存一个值
    pub is_const: bool,
}

impl ColumnWithTypeAndName {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_const: false,
        }
    }

    pub fn constant(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_const: true,
        }
    }
}

/// 数据块
///
/// 规划阶段只关心列的名称和类型，行数据只记录行数。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    columns: Vec<ColumnWithTypeAndName>,
    rows: usize,
}

impl Block {
    pub fn new(columns: Vec<ColumnWithTypeAndName>) -> Self {
        Self { columns, rows: 0 }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn columns(&self) -> &[ColumnWithTypeAndName] {
        &self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn insert(&mut self, column: ColumnWithTypeAndName) {
        self.columns.push(column);
    }

    pub fn has(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn get_by_name(&self, name: &str) -> AnalyzerResult<&ColumnWithTypeAndName> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| {
                AnalyzerError::structural(format!(
                    "数据块中不存在列 {}，现有列: {}",
                    name,
                    self.dump_names()
                ))
            })
    }

    /// 常量列转为普通列
    pub fn materialize(&self) -> Block {
        let columns = self
            .columns
            .iter()
            .map(|column| ColumnWithTypeAndName {
                is_const: false,
                ..column.clone()
            })
            .collect();
        Block {
            columns,
            rows: self.rows,
        }
    }

    /// 保留表头，清空数据
    pub fn clone_empty(&self) -> Block {
        Block {
            columns: self.columns.clone(),
            rows: 0,
        }
    }

    pub fn dump_names(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
