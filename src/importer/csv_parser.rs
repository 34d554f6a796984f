// ==========================================
// 机坪地勤周转预测 - CSV 文本解析器
// ==========================================
// 规则: 按行切分 → 去首尾空白 → 丢弃空行 → 首行为表头 → 逗号切分并逐字段去空白
// 限制: 不处理引号/转义, 含逗号的字段会被错误切分（格式约定, 可接受）
// ==========================================

use crate::domain::table::RawCsvTable;
use crate::importer::error::ImportError;
use crate::importer::error::ImportResult;
use crate::importer::importer_trait::TableParser;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

pub struct CsvTableParser;

impl TableParser for CsvTableParser {
    fn parse_text(&self, raw: &str) -> ImportResult<RawCsvTable> {
        // 预处理: 去掉空白行
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Ok(RawCsvTable::default());
        }

        let normalized = lines.join("\n");
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .quoting(false) // 引号按普通字符处理
            .trim(Trim::All)
            .from_reader(normalized.as_bytes());

        // 读取表头
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawCsvTable::new(headers, rows))
    }

    fn parse_file(&self, file_path: &Path) -> ImportResult<RawCsvTable> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let raw = std::fs::read_to_string(file_path)?;
        let table = self.parse_text(&raw)?;

        tracing::debug!(
            "CSV 文件解析完成: {} ({} 列, {} 行)",
            file_path.display(),
            table.headers.len(),
            table.row_count()
        );

        Ok(table)
    }
}
