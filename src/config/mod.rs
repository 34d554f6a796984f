// ==========================================
// 机坪地勤周转预测 - 配置层
// ==========================================
// 职责: 估算系数、阈值、常量、源文件配置
// 存储: 内置默认值 + 可选 JSON 文件 + 环境变量
// ==========================================

pub mod estimator_config;

// 重导出核心配置
pub use estimator_config::{
    ConfigError, ConfigResult, EstimatorConfig, ReadinessConfig, ResourceWeights, RiskConfig,
    SourceFiles, TatConfig, ENV_DATA_DIR, ENV_PREDICT_LATENCY_MS,
};
