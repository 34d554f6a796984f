// ==========================================
// 机坪地勤周转预测 - API层错误类型
// ==========================================
// 职责: 汇总导入/配置/预测错误, 转换为展示层可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::PredictionError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("没有可用航班: 三张源表联表结果为空")]
    NoFlightsAvailable,

    // ==========================================
    // 预测请求错误
    // ==========================================
    #[error("预测请求已被取代: request_id={request_id}, generation={generation}, latest={latest}")]
    Superseded {
        request_id: String,
        generation: u64,
        latest: u64,
    },

    // ==========================================
    // 导入/配置错误
    // ==========================================
    #[error("数据导入失败: {0}")]
    ImportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为被新请求取代（展示层应静默忽略）
    pub fn is_superseded(&self) -> bool {
        matches!(self, ApiError::Superseded { .. })
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Superseded {
                request_id,
                generation,
                latest,
            } => ApiError::Superseded {
                request_id,
                generation,
                latest,
            },
        }
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
