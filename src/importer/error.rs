// ==========================================
// 机坪地勤周转预测 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 数据形状问题（非数字/时间无法解析/缺联表伙伴）不报错,
//       走默认值并记入 JoinReport; 此处只有真正的失败
// ==========================================

use crate::domain::types::ResourceKind;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据源错误 =====
    #[error("{table} 数据源加载失败: {message}")]
    SourceLoadError { table: ResourceKind, message: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
