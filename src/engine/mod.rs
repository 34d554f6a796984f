// ==========================================
// 机坪地勤周转预测 - 引擎层
// ==========================================
// 职责: 就绪度评分 / TAT 估算 / 带延迟的预测服务
// 红线: 评分与估算为纯函数, 唯一的异步是模拟延迟
// ==========================================

pub mod prediction_service;
pub mod readiness;
pub mod tat_estimator;

// 重导出核心引擎
pub use prediction_service::{PredictionError, PredictionService, TatPredictor};
pub use readiness::{round_half_up, ReadinessScorer};
pub use tat_estimator::{recommendation, select_bottleneck, CostPoint, TatEstimate, TatEstimator};
