//! 对外错误码定义
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (00=成功, 01=结构, 02=类型, 03=功能, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码
///
/// 错误码一旦定义不应随意修改，保证调用方兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // ==================== 成功 (00xx) ====================
    Success = 0,

    // ==================== 结构错误 (01xx) ====================
    /// 查询树结构不合法
    InvalidQueryTree = 100,

    // ==================== 类型错误 (02xx) ====================
    /// 列类型不匹配
    TypeMismatch = 200,

    // ==================== 功能错误 (03xx) ====================
    /// 已识别但尚未实现的功能
    NotImplemented = 300,

    // ==================== 系统错误 (09xx) ====================
    /// 框架内部不变量被破坏
    LogicalError = 900,
    /// 未知错误
    Unknown = 999,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 根据 i32 值获取错误码
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::Success),
            100 => Some(ErrorCode::InvalidQueryTree),
            200 => Some(ErrorCode::TypeMismatch),
            300 => Some(ErrorCode::NotImplemented),
            900 => Some(ErrorCode::LogicalError),
            999 => Some(ErrorCode::Unknown),
            _ => None,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            0 => ErrorCategory::Success,
            100..=199 => ErrorCategory::Structure,
            200..=299 => ErrorCategory::Type,
            300..=399 => ErrorCategory::Feature,
            900..=999 => ErrorCategory::System,
            _ => ErrorCategory::Unknown,
        }
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "成功",
            ErrorCode::InvalidQueryTree => "查询树结构错误",
            ErrorCode::TypeMismatch => "类型不匹配",
            ErrorCode::NotImplemented => "功能未实现",
            ErrorCode::LogicalError => "内部逻辑错误",
            ErrorCode::Unknown => "未知错误",
        }
    }

    /// 判断是否由查询本身引起（而非框架缺陷）
    pub fn is_query_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Structure | ErrorCategory::Type | ErrorCategory::Feature
        )
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::Success
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    Structure,
    Type,
    Feature,
    System,
    Unknown,
}

/// 对外错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    /// 错误码
    pub code: ErrorCode,
    /// 错误消息
    pub message: String,
}

impl PublicError {
    /// 创建新的对外错误
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 使用默认消息创建错误
    pub fn with_default_message(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }
}

/// 内部错误到对外错误的转换 trait
///
/// 实现此 trait 可以将内部错误转换为对外错误，过滤内部细节
pub trait ToPublicError {
    /// 转换为对外错误
    fn to_public_error(&self) -> PublicError;

    /// 获取对外错误码
    fn to_error_code(&self) -> ErrorCode;

    /// 获取对外错误消息
    fn to_public_message(&self) -> String;
}
