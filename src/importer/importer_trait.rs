// ==========================================
// 机坪地勤周转预测 - 导入管道 Trait
// ==========================================
// 职责: 定义导入各阶段接口（不包含实现）
// 阶段: 文本解析 → 联表 + 就绪度评分
// ==========================================

use crate::domain::flight::{FlightResource, JoinReport};
use crate::domain::table::RawCsvTable;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// TableParser Trait
// ==========================================
// 用途: 原始文本解析（阶段 0）
// 实现者: CsvTableParser
pub trait TableParser: Send + Sync {
    /// 解析内存中的 CSV 文本
    ///
    /// # 参数
    /// - raw: 原始文本（首个非空行为表头）
    ///
    /// # 返回
    /// - Ok(RawCsvTable): 表头 + 行, 值保持原始字符串
    /// - Err: 底层读取错误
    fn parse_text(&self, raw: &str) -> ImportResult<RawCsvTable>;

    /// 读取并解析 CSV 文件
    fn parse_file(&self, file_path: &Path) -> ImportResult<RawCsvTable>;
}

// ==========================================
// ResourceJoiner Trait
// ==========================================
// 用途: 三表联表 + 就绪度评分（阶段 1）
// 实现者: FlightResourceJoiner
pub trait ResourceJoiner: Send + Sync {
    /// 以行李表为驱动表做内连接
    ///
    /// # 返回
    /// - JoinOutput: 航班资源列表（保持行李表顺序）+ 诊断报告
    fn join(
        &self,
        baggage: &RawCsvTable,
        catering: &RawCsvTable,
        fuel: &RawCsvTable,
    ) -> JoinOutput;
}

/// 联表输出
#[derive(Debug, Clone, Default)]
pub struct JoinOutput {
    pub flights: Vec<FlightResource>,
    pub report: JoinReport,
}
