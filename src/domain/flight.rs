// ==========================================
// 机坪地勤周转预测 - 航班资源实体
// ==========================================
// 职责: FlightResource (联表输出) / JoinReport (联表诊断)
// 生命周期: 每次加载三张源表计算一次, 之后不可变
// ==========================================

use crate::domain::types::ResourceKind;
use serde::{Deserialize, Serialize};

/// 燃油表航司字段为空时的默认航司
pub const UNKNOWN_AIRLINE: &str = "Unknown";

// ==========================================
// FlightResource - 航班资源就绪度
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResource {
    pub flight_id: String,
    pub airline: String,
    pub baggage_readiness: i32,  // [40, 100]
    pub fuel_readiness: i32,     // [40, 100]
    pub catering_readiness: i32, // [40, 100]
}

impl FlightResource {
    /// 按资源类型取就绪度
    pub fn readiness(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Baggage => self.baggage_readiness,
            ResourceKind::Fuel => self.fuel_readiness,
            ResourceKind::Catering => self.catering_readiness,
        }
    }

    /// 三项就绪度的最小值
    pub fn min_readiness(&self) -> i32 {
        self.baggage_readiness
            .min(self.fuel_readiness)
            .min(self.catering_readiness)
    }

    /// 航班号前缀（"SO-101" → "SO"）
    pub fn flight_prefix(&self) -> &str {
        flight_prefix(&self.flight_id)
    }
}

/// 取航班号中第一个 '-' 之前的部分
pub fn flight_prefix(flight_id: &str) -> &str {
    flight_id.split('-').next().unwrap_or("")
}

// ==========================================
// 联表诊断
// ==========================================

/// 字段取默认值的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefaultReason {
    MissingValue,     // 空值 → 0
    UnparsableNumber, // 非数字 → 0
    UnparsableTime,   // 时间无法匹配 → 0 分钟
}

/// 一次取默认值事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultedField {
    pub table: ResourceKind,
    pub row_number: usize,
    pub column: String,
    pub raw_value: String,
    pub reason: DefaultReason,
}

/// 被丢弃的行李记录（缺少联表伙伴）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRecord {
    pub row_number: usize,
    pub flight_id: String,
    pub missing: Vec<ResourceKind>,
}

/// 联表诊断报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    pub baggage_rows: usize,
    pub joined: usize,
    pub dropped: Vec<DroppedRecord>,
    pub defaulted: Vec<DefaultedField>,
}

impl JoinReport {
    /// 因缺少指定资源表记录而被丢弃的行数
    pub fn dropped_missing(&self, kind: ResourceKind) -> usize {
        self.dropped
            .iter()
            .filter(|d| d.missing.contains(&kind))
            .count()
    }

    pub fn defaulted_count(&self, reason: DefaultReason) -> usize {
        self.defaulted.iter().filter(|d| d.reason == reason).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlightResource {
        FlightResource {
            flight_id: "SO-101".to_string(),
            airline: "IndiGo".to_string(),
            baggage_readiness: 74,
            fuel_readiness: 58,
            catering_readiness: 49,
        }
    }

    #[test]
    fn test_readiness_by_kind() {
        let flight = sample();
        assert_eq!(flight.readiness(ResourceKind::Baggage), 74);
        assert_eq!(flight.readiness(ResourceKind::Fuel), 58);
        assert_eq!(flight.readiness(ResourceKind::Catering), 49);
        assert_eq!(flight.min_readiness(), 49);
    }

    #[test]
    fn test_flight_prefix() {
        assert_eq!(sample().flight_prefix(), "SO");
        assert_eq!(flight_prefix("DE"), "DE");
        assert_eq!(flight_prefix(""), "");
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["flightId"], "SO-101");
        assert_eq!(json["cateringReadiness"], 49);
    }
}
