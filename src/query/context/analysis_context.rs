//! 分析上下文
//!
//! 作用域节点（查询、并集）各自持有一个上下文句柄，多个节点可以共享同一个上下文。
//! 遍历期间切换"当前上下文"只是重新绑定 `Arc`，不会复制设置。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::settings::Settings;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// 上下文共享句柄
pub type ContextPtr = Arc<QueryContext>;

/// 查询分析上下文
#[derive(Debug)]
pub struct QueryContext {
    id: u64,
    settings: Settings,
}

impl QueryContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            settings,
        }
    }

    /// 为嵌套作用域派生新的上下文，设置在派生时复制一份
    pub fn create_copy(parent: &ContextPtr) -> Self {
        Self::new(parent.settings.clone())
    }

    /// 派生新的上下文并修改其设置
    pub fn create_copy_with<F>(parent: &ContextPtr, update: F) -> Self
    where
        F: FnOnce(&mut Settings),
    {
        let mut context = Self::create_copy(parent);
        update(&mut context.settings);
        context
    }

    pub fn into_ptr(self) -> ContextPtr {
        Arc::new(self)
    }

    /// 进程内唯一的上下文编号
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
