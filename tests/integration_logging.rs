//! 日志系统集成测试
//!
//! 测试范围:
//! - 日志配置加载
//! - 日志文件创建和写入

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use query_analyzer::config::{Config, LogConfig};
use query_analyzer::query::passes::create_default_pass_manager;
use query_analyzer::query::tree::QueryTreeNode;
use query_analyzer::utils::logging;

/// 测试日志配置序列化
#[test]
fn test_log_config_serialization() {
    let config = Config {
        log: LogConfig {
            level: "debug".to_string(),
            dir: "test_logs".to_string(),
            file: "test_analyzer".to_string(),
            max_file_size: 50 * 1024 * 1024, // 50MB
            max_files: 3,
            async_write: false,
        },
        ..Config::default()
    };

    let toml_str = toml::to_string_pretty(&config).expect("序列化配置失败");
    assert!(toml_str.contains("[log]"));
    assert!(toml_str.contains("level = \"debug\""));
    assert!(toml_str.contains("max_file_size = 52428800"));
    assert!(toml_str.contains("async = false"));

    let loaded: Config = toml::from_str(&toml_str).expect("反序列化配置失败");
    assert_eq!(loaded, config);
}

/// 测试日志写入文件
#[test]
#[serial]
fn test_log_file_written() {
    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let config = Config {
        log: LogConfig {
            level: "debug".to_string(),
            dir: temp_dir.path().to_string_lossy().into_owned(),
            file: "integration".to_string(),
            async_write: false,
            ..LogConfig::default()
        },
        ..Config::default()
    };

    logging::init(&config.log).expect("日志初始化失败");
    assert!(logging::is_initialized());
    assert!(logging::init(&config.log).is_err());

    let context = config.create_context();
    let manager = create_default_pass_manager(context.clone());
    let mut tree = QueryTreeNode::query(context, Vec::new()).into_ptr();
    manager.run(&mut tree).expect("passes should succeed");

    logging::shutdown();
    assert!(!logging::is_initialized());

    let contents: String = fs::read_dir(temp_dir.path())
        .expect("读取日志目录失败")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("integration"))
        .filter_map(|entry| fs::read_to_string(entry.path()).ok())
        .collect();

    assert!(contents.contains("日志系统初始化完成"));
    assert!(contents.contains("QueryTreeDepthCheck"));
}
