// ==========================================
// 机坪地勤周转预测 - 预测输入与结果
// ==========================================
// 职责: PredictionInput / PredictionResult / PredictionOutcome
// 生命周期: 每次预测请求新建, 不可变; 输入变化或新请求后丢弃
// ==========================================

use crate::domain::flight::FlightResource;
use crate::domain::types::{AircraftType, ResourceKind, RiskTier};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// PredictionInput - 预测输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    pub flight_id: String,
    pub aircraft_type: AircraftType,
    pub arrival_delay_minutes: u32,
}

impl PredictionInput {
    pub fn new(
        flight_id: impl Into<String>,
        aircraft_type: AircraftType,
        arrival_delay_minutes: u32,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            aircraft_type,
            arrival_delay_minutes,
        }
    }
}

// ==========================================
// PredictionResult - 预测结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub tat: i32,
    pub risk: RiskTier,
    pub cost: f64,
    pub probability: u32,
    pub bottleneck: ResourceKind,
}

// ==========================================
// PredictionOutcome - 预测结果信封
// ==========================================
// 展示层直接消费: 结果 + 已解析的输入 + 建议文案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    pub request_id: String,
    pub generation: u64,
    pub input: PredictionInput,
    pub flight: FlightResource,
    pub base_tat: i32,
    pub result: PredictionResult,
    pub recommendation: Option<String>,
    pub generated_at: NaiveDateTime,
}
