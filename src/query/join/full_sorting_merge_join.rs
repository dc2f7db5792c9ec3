//! 全排序归并连接的规划阶段替身
//!
//! 规划阶段只负责检查连接键类型并计算结果表头，
//! 数据相关的操作都属于执行阶段，在这里调用会返回逻辑错误。

use std::sync::Arc;

use crate::core::error::{AnalyzerError, AnalyzerResult};

use super::{Block, Join, JoinPipelineType, TableJoin};

#[derive(Debug, Clone)]
pub struct FullSortingMergeJoin {
    table_join: Arc<TableJoin>,
    right_sample_block: Block,
    totals: Block,
}

impl FullSortingMergeJoin {
    pub fn new(table_join: Arc<TableJoin>, right_sample_block: Block) -> Self {
        log::trace!(
            "将使用 FullSortingMergeJoin，右表列: [{}]",
            right_sample_block.dump_names()
        );
        Self {
            table_join,
            right_sample_block,
            totals: Block::default(),
        }
    }

    pub fn right_sample_block(&self) -> &Block {
        &self.right_sample_block
    }

    fn execution_only(operation: &str) -> AnalyzerError {
        AnalyzerError::logical(format!(
            "FullSortingMergeJoin::{} 只能在执行阶段调用",
            operation
        ))
    }
}

impl Join for FullSortingMergeJoin {
    fn table_join(&self) -> &TableJoin {
        &self.table_join
    }

    fn add_joined_block(&mut self, _block: &Block, _check_limits: bool) -> AnalyzerResult<bool> {
        Err(Self::execution_only("add_joined_block"))
    }

    fn check_types_of_keys(&self, left_block: &Block) -> AnalyzerResult<()> {
        let clause = self.table_join.only_clause()?;

        for (left_key, right_key) in clause.key_pairs()? {
            let left_type = &left_block.get_by_name(left_key)?.data_type;
            let right_type = &self.right_sample_block.get_by_name(right_key)?.data_type;

            // 可空性不同不算类型不一致
            if left_type.remove_nullable() == right_type.remove_nullable() {
                continue;
            }

            let left_base = left_type.recursive_remove_low_cardinality();
            let right_base = right_type.recursive_remove_low_cardinality();
            let message = format!(
                "连接键类型不一致: 左侧 {} :: {}，右侧 {} :: {}",
                left_key, left_type, right_key, right_type
            );

            if left_base.remove_nullable() == right_base.remove_nullable() {
                return Err(AnalyzerError::not_implemented(format!(
                    "{}，仅 LowCardinality 不同的连接键暂不支持",
                    message
                )));
            }
            return Err(AnalyzerError::type_mismatch(message));
        }
        Ok(())
    }

    /// 只计算结果表头
    fn join_block(&self, block: &mut Block) -> AnalyzerResult<()> {
        for column in self.right_sample_block.columns() {
            block.insert(column.clone());
        }
        *block = block.materialize().clone_empty();
        Ok(())
    }

    fn set_totals(&mut self, block: Block) {
        self.totals = block;
    }

    fn totals(&self) -> &Block {
        &self.totals
    }

    fn total_row_count(&self) -> AnalyzerResult<usize> {
        Err(Self::execution_only("total_row_count"))
    }

    fn total_byte_count(&self) -> AnalyzerResult<usize> {
        Err(Self::execution_only("total_byte_count"))
    }

    fn always_returns_empty_set(&self) -> AnalyzerResult<bool> {
        Err(Self::execution_only("always_returns_empty_set"))
    }

    fn non_joined_blocks(
        &self,
        _left_sample_block: &Block,
        _result_sample_block: &Block,
        _max_block_size: u64,
    ) -> AnalyzerResult<Vec<Block>> {
        Err(Self::execution_only("non_joined_blocks"))
    }

    fn pipeline_type(&self) -> JoinPipelineType {
        JoinPipelineType::YShaped
    }
}
