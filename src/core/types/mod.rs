// 核心类型系统模块
//
// 包含查询分析阶段用到的列数据类型

pub mod data_type;

pub use data_type::DataType;
