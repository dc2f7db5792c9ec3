//! 查询分析上下文模块

pub mod analysis_context;
pub mod settings;

pub use analysis_context::{ContextPtr, QueryContext};
pub use settings::Settings;
