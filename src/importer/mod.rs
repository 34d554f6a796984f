// ==========================================
// 机坪地勤周转预测 - 导入层
// ==========================================
// 职责: 三张 CSV 源表 → 解析 → 去掩码联表 → 航班资源就绪度
// 支持: 内存文本, 数据目录
// ==========================================

// 模块声明
pub mod csv_parser;
pub mod error;
pub mod field_reader;
pub mod importer_trait;
pub mod resource_joiner;
pub mod source_loader;
pub mod time_parser;

// 重导出核心类型
pub use csv_parser::CsvTableParser;
pub use error::{ImportError, ImportResult};
pub use field_reader::{columns, unmask_flight_key, FieldReader, MASK_CHAR};
pub use resource_joiner::FlightResourceJoiner;
pub use source_loader::{SourceTables, SourceTexts};
pub use time_parser::{duration_minutes, parse_minutes, to_minutes};

// 重导出 Trait 接口
pub use importer_trait::{JoinOutput, ResourceJoiner, TableParser};
