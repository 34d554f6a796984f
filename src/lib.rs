// ==========================================
// 机坪地勤周转预测 - 核心库
// ==========================================
// 输入: 行李 / 配餐 / 燃油 三张 CSV 源表
// 输出: 航班资源就绪度 + TAT / 风险 / 成本 / 瓶颈预测
// 系统定位: 展示层的计算内核 (无持久化, 无网络)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - CSV 解析与联表
pub mod importer;

// 引擎层 - 就绪度与 TAT 估算
pub mod engine;

// 配置层 - 系数与阈值
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 展示层入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AircraftType, CsvRecord, FlightResource, JoinReport, PredictionInput, PredictionOutcome,
    PredictionResult, RawCsvTable, ResourceKind, RiskTier,
};

// 引擎
pub use engine::{PredictionService, ReadinessScorer, TatEstimator, TatPredictor};

// 导入
pub use importer::{CsvTableParser, FlightResourceJoiner, SourceTexts};

// 配置
pub use config::EstimatorConfig;

// API
pub use api::{ApiError, ApiResult, GroundOpsApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "机坪地勤周转预测";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
