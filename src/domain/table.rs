// ==========================================
// 机坪地勤周转预测 - 原始表格模型
// ==========================================
// 职责: RawCsvTable (表头 + 行) / CsvRecord (列名 → 原始值)
// 红线: 本层不做类型转换, 所有值保持原始字符串
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 行短于表头时, 缺失单元格的展示占位符
pub const CELL_PLACEHOLDER: &str = "-";

// ==========================================
// RawCsvTable - 原始表格
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawCsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 按表头逐行生成 CsvRecord（行号从 1 开始, 不含表头）
    pub fn records(&self) -> Vec<CsvRecord> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| CsvRecord::from_row(&self.headers, row, idx + 1))
            .collect()
    }

    /// 取单元格展示值; 缺失单元格返回占位符
    pub fn display_cell(&self, row_idx: usize, col_idx: usize) -> &str {
        self.rows
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .map(String::as_str)
            .unwrap_or(CELL_PLACEHOLDER)
    }

    /// 展示视图: 每行补齐到表头宽度, 多余单元格截断
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        (0..self.rows.len())
            .map(|row_idx| {
                (0..self.headers.len())
                    .map(|col_idx| self.display_cell(row_idx, col_idx).to_string())
                    .collect()
            })
            .collect()
    }
}

// ==========================================
// CsvRecord - 单行记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    pub row_number: usize,
    fields: HashMap<String, String>,
}

impl CsvRecord {
    /// 按位置将一行与表头拉链组合
    ///
    /// # 规则
    /// - 行短于表头: 缺失列映射为空字符串
    /// - 行长于表头: 多余单元格忽略
    /// - 表头重名: 后出现的列覆盖前者
    pub fn from_row(headers: &[String], row: &[String], row_number: usize) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = row.get(idx).cloned().unwrap_or_default();
                (header.clone(), value)
            })
            .collect();

        Self { row_number, fields }
    }

    /// 取字段原始值; 列不存在时返回空字符串
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }
}
