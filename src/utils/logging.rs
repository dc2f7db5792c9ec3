// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，异步写入模式下退出前需要 flush

use crate::config::LogConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// 重复初始化会返回错误，需要先调用 `shutdown`。
///
/// # Examples
/// ```no_run
/// use query_analyzer::config::Config;
/// use query_analyzer::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .map_err(|_| "日志句柄锁已损坏")?;
    if guard.is_some() {
        return Err("日志系统已经初始化".into());
    }

    let write_mode = if config.async_write {
        WriteMode::Async
    } else {
        WriteMode::Direct
    };

    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(write_mode)
        .append()
        .start()?;

    *guard = Some(handle);
    drop(guard);

    log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            handle.shutdown();
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
