// ==========================================
// 机坪地勤周转预测 - 估算配置
// ==========================================
// 职责: 就绪度系数 / TAT 基准 / 风险阈值 / 成本常量 / 源文件名
// 来源: 内置默认值 → JSON 配置文件 → 环境变量覆写
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// 环境变量: 预测模拟延迟（毫秒）
pub const ENV_PREDICT_LATENCY_MS: &str = "GROUND_OPS_PREDICT_LATENCY_MS";
/// 环境变量: CSV 数据目录
pub const ENV_DATA_DIR: &str = "GROUND_OPS_DATA_DIR";

// ==========================================
// 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置值非法 (key: {key}): {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// 就绪度系数
// ==========================================
// readiness = 100 - duration_weight × 时长 - quantity_weight × 数量 / quantity_divisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceWeights {
    pub duration_weight: f64,
    pub quantity_weight: f64,
    #[serde(default = "default_divisor")]
    pub quantity_divisor: f64,
}

fn default_divisor() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    pub baggage: ResourceWeights,
    pub fuel: ResourceWeights,
    pub catering: ResourceWeights,
    pub min_score: i32,
    pub max_score: i32,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            baggage: ResourceWeights {
                duration_weight: 0.8,
                quantity_weight: 0.06,
                quantity_divisor: 1.0,
            },
            fuel: ResourceWeights {
                duration_weight: 1.1,
                quantity_weight: 1.0,
                quantity_divisor: 850.0,
            },
            catering: ResourceWeights {
                duration_weight: 1.2,
                quantity_weight: 0.05,
                quantity_divisor: 1.0,
            },
            min_score: 40,
            max_score: 100,
        }
    }
}

// ==========================================
// TAT 基准与附加延误权重
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TatConfig {
    pub narrow_body_types: Vec<String>,
    pub narrow_body_base_tat: i32,
    pub wide_body_base_tat: i32,
    pub arrival_delay_weight: f64,
    pub baggage_gap_weight: f64,
    pub fuel_gap_weight: f64,
    pub catering_gap_weight: f64,
}

impl Default for TatConfig {
    fn default() -> Self {
        Self {
            narrow_body_types: vec!["A320".to_string(), "B737".to_string()],
            narrow_body_base_tat: 45,
            wide_body_base_tat: 60,
            arrival_delay_weight: 0.8,
            baggage_gap_weight: 0.2,
            fuel_gap_weight: 0.15,
            catering_gap_weight: 0.25,
        }
    }
}

// ==========================================
// 风险分级
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub high_delay_threshold: u32,    // 到港延误 > 阈值
    pub high_catering_threshold: i32, // 且配餐就绪度 < 阈值 → High
    pub medium_tat_margin: i32,       // finalTat > base + margin → Medium
    pub probability_low: u32,
    pub probability_medium: u32,
    pub probability_high: u32,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_delay_threshold: 15,
            high_catering_threshold: 60,
            medium_tat_margin: 10,
            probability_low: 15,
            probability_medium: 45,
            probability_high: 85,
        }
    }
}

// ==========================================
// 源文件名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub baggage: String,
    pub catering: String,
    pub fuel: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            baggage: "baggage_flow.csv".to_string(),
            catering: "catering_logs.csv".to_string(),
            fuel: "fuel_operations.csv".to_string(),
        }
    }
}

// ==========================================
// EstimatorConfig - 总配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub readiness: ReadinessConfig,
    pub tat: TatConfig,
    pub risk: RiskConfig,
    pub delay_cost_per_minute: f64,
    pub prediction_latency_ms: u64,
    pub max_arrival_delay_minutes: u32,
    pub default_aircraft_type: String,
    pub default_arrival_delay_minutes: u32,
    /// 航班号前缀 → 机型（选中航班时预选机型）
    pub aircraft_by_flight_prefix: BTreeMap<String, String>,
    pub data_dir: Option<String>,
    pub source_files: SourceFiles,
    /// 成本曲线采样: 0..=cost_curve_max_minutes, 步长 cost_curve_step_minutes
    pub cost_curve_max_minutes: u32,
    pub cost_curve_step_minutes: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        let aircraft_by_flight_prefix = [("SO", "B737"), ("AM", "A320"), ("DE", "B777")]
            .into_iter()
            .map(|(prefix, aircraft)| (prefix.to_string(), aircraft.to_string()))
            .collect();

        Self {
            readiness: ReadinessConfig::default(),
            tat: TatConfig::default(),
            risk: RiskConfig::default(),
            delay_cost_per_minute: 65.0,
            prediction_latency_ms: 1200,
            max_arrival_delay_minutes: 120,
            default_aircraft_type: "A320".to_string(),
            default_arrival_delay_minutes: 5,
            aircraft_by_flight_prefix,
            data_dir: None,
            source_files: SourceFiles::default(),
            cost_curve_max_minutes: 60,
            cost_curve_step_minutes: 5,
        }
    }
}

impl EstimatorConfig {
    /// 从 JSON 文件加载配置（缺省字段取默认值）, 随后校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: EstimatorConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        tracing::info!("估算配置已加载: {}", path.display());
        Ok(config)
    }

    /// 应用环境变量覆写
    ///
    /// # 环境变量
    /// - `GROUND_OPS_PREDICT_LATENCY_MS=0` 关闭模拟延迟
    /// - `GROUND_OPS_DATA_DIR=/path/to/csv` 指定 CSV 数据目录
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(ms) = std::env::var(ENV_PREDICT_LATENCY_MS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            tracing::debug!("环境变量覆写 prediction_latency_ms = {}", ms);
            self.prediction_latency_ms = ms;
        }

        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                tracing::debug!("环境变量覆写 data_dir = {}", dir);
                self.data_dir = Some(dir.to_string());
            }
        }

        self
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.readiness.min_score > self.readiness.max_score {
            return Err(invalid(
                "readiness.min_score",
                format!(
                    "下限 {} 大于上限 {}",
                    self.readiness.min_score, self.readiness.max_score
                ),
            ));
        }

        for (key, weights) in [
            ("readiness.baggage", &self.readiness.baggage),
            ("readiness.fuel", &self.readiness.fuel),
            ("readiness.catering", &self.readiness.catering),
        ] {
            if weights.duration_weight < 0.0 || weights.quantity_weight < 0.0 {
                return Err(invalid(key, "系数不能为负数".to_string()));
            }
            if weights.quantity_divisor <= 0.0 {
                return Err(invalid(key, "quantity_divisor 必须大于 0".to_string()));
            }
        }

        if self.tat.narrow_body_base_tat < 0 || self.tat.wide_body_base_tat < 0 {
            return Err(invalid("tat.base_tat", "基准 TAT 不能为负数".to_string()));
        }

        if self.delay_cost_per_minute < 0.0 {
            return Err(invalid(
                "delay_cost_per_minute",
                format!("成本常量不能为负数: {}", self.delay_cost_per_minute),
            ));
        }

        if self.cost_curve_step_minutes == 0 {
            return Err(invalid(
                "cost_curve_step_minutes",
                "步长必须大于 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}
