//! JOIN 规划模块
//!
//! 规划阶段只需要连接算法的替身：检查连接键类型、计算结果表头，
//! 真正的连接在执行阶段完成。

pub mod block;
pub mod full_sorting_merge_join;
pub mod table_join;

pub use block::{Block, ColumnWithTypeAndName};
pub use full_sorting_merge_join::FullSortingMergeJoin;
pub use table_join::{JoinOnClause, TableJoin};

use crate::core::error::AnalyzerResult;

/// 连接算法在执行流水线中的形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPipelineType {
    /// 先读取右表再处理左表
    FillRightFirst,
    /// 右表已经填充完成
    FilledRight,
    /// 左右两侧并行读取后合并
    YShaped,
}

/// 连接算法
pub trait Join: Send + Sync {
    fn table_join(&self) -> &TableJoin;

    /// 向右表添加数据块，返回是否还能继续添加
    fn add_joined_block(&mut self, block: &Block, check_limits: bool) -> AnalyzerResult<bool>;

    /// 检查左表与右表的连接键类型是否兼容
    fn check_types_of_keys(&self, left_block: &Block) -> AnalyzerResult<()>;

    /// 对左表数据块执行连接
    fn join_block(&self, block: &mut Block) -> AnalyzerResult<()>;

    fn set_totals(&mut self, block: Block);

    fn totals(&self) -> &Block;

    fn total_row_count(&self) -> AnalyzerResult<usize>;

    fn total_byte_count(&self) -> AnalyzerResult<usize>;

    fn always_returns_empty_set(&self) -> AnalyzerResult<bool>;

    /// 右表中未被连接上的行
    fn non_joined_blocks(
        &self,
        left_sample_block: &Block,
        result_sample_block: &Block,
        max_block_size: u64,
    ) -> AnalyzerResult<Vec<Block>>;

    fn pipeline_type(&self) -> JoinPipelineType {
        JoinPipelineType::FillRightFirst
    }
}
