use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::query::context::{ContextPtr, QueryContext, Settings};

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 异步写入，退出前需要调用 `logging::shutdown`
    #[serde(rename = "async")]
    pub async_write: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "query_analyzer".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            async_write: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub settings: Settings,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.settings.max_query_tree_depth == 0 {
            return Err("max_query_tree_depth 必须大于 0".into());
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 以配置中的设置创建根上下文
    pub fn create_context(&self) -> ContextPtr {
        QueryContext::new(self.settings.clone()).into_ptr()
    }
}
