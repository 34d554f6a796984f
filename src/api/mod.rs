// ==========================================
// 机坪地勤周转预测 - API 层
// ==========================================
// 职责: 展示层调用入口, 协调导入层与引擎层
// ==========================================

pub mod error;
pub mod ground_ops_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use ground_ops_api::{GroundOpsApi, TableView};
