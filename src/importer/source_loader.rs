// ==========================================
// 机坪地勤周转预测 - 数据源加载
// ==========================================
// 来源: 内存文本 (SourceTexts) 或 数据目录下的三个 CSV 文件 (SourceTables::from_dir)
// 输出: 三张解析后的原始表
// ==========================================

use crate::config::SourceFiles;
use crate::domain::table::RawCsvTable;
use crate::domain::types::ResourceKind;
use crate::importer::csv_parser::CsvTableParser;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::TableParser;
use std::path::Path;

/// 三张源表的原始文本
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTexts {
    pub baggage: String,
    pub catering: String,
    pub fuel: String,
}

impl SourceTexts {
    pub fn new(
        baggage: impl Into<String>,
        catering: impl Into<String>,
        fuel: impl Into<String>,
    ) -> Self {
        Self {
            baggage: baggage.into(),
            catering: catering.into(),
            fuel: fuel.into(),
        }
    }

    /// 解析三张表
    pub fn parse(&self) -> ImportResult<SourceTables> {
        let parser = CsvTableParser;
        Ok(SourceTables {
            baggage: parser.parse_text(&self.baggage)?,
            catering: parser.parse_text(&self.catering)?,
            fuel: parser.parse_text(&self.fuel)?,
        })
    }
}

/// 三张解析后的源表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTables {
    pub baggage: RawCsvTable,
    pub catering: RawCsvTable,
    pub fuel: RawCsvTable,
}

impl SourceTables {
    /// 从数据目录解析三个 CSV 文件
    ///
    /// # 返回
    /// - Err(FileNotFound): 任一文件不存在
    /// - Err(SourceLoadError): 读取或解析失败, 带表名
    pub fn from_dir<P: AsRef<Path>>(dir: P, files: &SourceFiles) -> ImportResult<Self> {
        let dir = dir.as_ref();
        let parser = CsvTableParser;
        let load = |table: ResourceKind, file_name: &str| -> ImportResult<RawCsvTable> {
            parser
                .parse_file(&dir.join(file_name))
                .map_err(|err| match err {
                    ImportError::FileNotFound(path) => ImportError::FileNotFound(path),
                    other => ImportError::SourceLoadError {
                        table,
                        message: other.to_string(),
                    },
                })
        };

        let tables = Self {
            baggage: load(ResourceKind::Baggage, &files.baggage)?,
            catering: load(ResourceKind::Catering, &files.catering)?,
            fuel: load(ResourceKind::Fuel, &files.fuel)?,
        };

        tracing::info!("数据源已从目录加载: {}", dir.display());
        Ok(tables)
    }

    pub fn table(&self, kind: ResourceKind) -> &RawCsvTable {
        match kind {
            ResourceKind::Baggage => &self.baggage,
            ResourceKind::Catering => &self.catering,
            ResourceKind::Fuel => &self.fuel,
        }
    }
}
