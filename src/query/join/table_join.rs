//! 连接条件描述

use crate::core::error::{AnalyzerError, AnalyzerResult};

/// 一个 ON 子句中的连接键
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOnClause {
    pub key_names_left: Vec<String>,
    pub key_names_right: Vec<String>,
}

impl JoinOnClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.key_names_left.push(left.into());
        self.key_names_right.push(right.into());
        self
    }

    /// 左右两侧的键一一对应
    pub fn key_pairs(&self) -> AnalyzerResult<impl Iterator<Item = (&str, &str)>> {
        if self.key_names_left.len() != self.key_names_right.len() {
            return Err(AnalyzerError::structural(format!(
                "连接键数量不一致: 左侧 {} 个，右侧 {} 个",
                self.key_names_left.len(),
                self.key_names_right.len()
            )));
        }
        Ok(self
            .key_names_left
            .iter()
            .map(String::as_str)
            .zip(self.key_names_right.iter().map(String::as_str)))
    }
}

/// 连接描述
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableJoin {
    clauses: Vec<JoinOnClause>,
}

impl TableJoin {
    pub fn new(clauses: Vec<JoinOnClause>) -> Self {
        Self { clauses }
    }

    pub fn clauses(&self) -> &[JoinOnClause] {
        &self.clauses
    }

    /// 获取唯一的 ON 子句，子句数量不为一时返回结构错误
    pub fn only_clause(&self) -> AnalyzerResult<&JoinOnClause> {
        match self.clauses.as_slice() {
            [clause] => Ok(clause),
            clauses => Err(AnalyzerError::structural(format!(
                "期望恰好一个连接条件，实际为 {} 个",
                clauses.len()
            ))),
        }
    }
}
