//! 查询分析错误处理
//!
//! 所有错误都会立即中止当前遍历。遍历框架在错误返回的路径上
//! 仍然会恢复上下文和深度，见 `query::visitor::context_visitor`。
//!
//! 错误分类：
//! - `Structural`：查询树结构不合法，例如连接键数量超出支持范围
//! - `TypeMismatch`：跨边界的列类型无法调和
//! - `NotImplemented`：已识别但尚未实现的形态
//! - `Logical`：框架保证的不变量被破坏，属于调用方缺陷

use thiserror::Error;

pub mod codes;

pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};

/// 统一的查询分析错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("查询树结构错误: {0}")]
    Structural(String),

    #[error("类型不匹配: {0}")]
    TypeMismatch(String),

    #[error("功能未实现: {0}")]
    NotImplemented(String),

    #[error("内部逻辑错误: {0}")]
    Logical(String),
}

/// 统一的结果类型
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    pub fn structural(message: impl Into<String>) -> Self {
        AnalyzerError::Structural(message.into())
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        AnalyzerError::TypeMismatch(message.into())
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        AnalyzerError::NotImplemented(message.into())
    }

    pub fn logical(message: impl Into<String>) -> Self {
        AnalyzerError::Logical(message.into())
    }
}

impl ToPublicError for AnalyzerError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            AnalyzerError::Structural(_) => ErrorCode::InvalidQueryTree,
            AnalyzerError::TypeMismatch(_) => ErrorCode::TypeMismatch,
            AnalyzerError::NotImplemented(_) => ErrorCode::NotImplemented,
            AnalyzerError::Logical(_) => ErrorCode::LogicalError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            // 内部错误不暴露细节
            AnalyzerError::Logical(_) => ErrorCode::LogicalError.default_message().to_string(),
            _ => self.to_string(),
        }
    }
}
