// ==========================================
// 机坪地勤周转预测 - 领域模型层
// ==========================================
// 职责: 定义表格模型、航班资源、预测输入输出
// 红线: 不含解析逻辑, 不含引擎逻辑
// ==========================================

pub mod flight;
pub mod prediction;
pub mod table;
pub mod types;

// 重导出核心类型
pub use flight::{
    flight_prefix, DefaultReason, DefaultedField, DroppedRecord, FlightResource, JoinReport,
    UNKNOWN_AIRLINE,
};
pub use prediction::{PredictionInput, PredictionOutcome, PredictionResult};
pub use table::{CsvRecord, RawCsvTable, CELL_PLACEHOLDER};
pub use types::{AircraftType, ResourceKind, RiskTier};
