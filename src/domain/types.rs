// ==========================================
// 机坪地勤周转预测 - 领域类型定义
// ==========================================
// 职责: 资源类型 / 风险等级 / 机型枚举
// 序列化格式: PascalCase (与展示层文案一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 地勤资源类型 (Resource Kind)
// ==========================================
// 顺序: Baggage → Fuel → Catering (瓶颈判定的检查顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Baggage,  // 行李装卸
    Fuel,     // 加油
    Catering, // 配餐
}

impl ResourceKind {
    /// 全部资源类型（按瓶颈检查顺序）
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Baggage,
        ResourceKind::Fuel,
        ResourceKind::Catering,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Baggage => "Baggage",
            ResourceKind::Fuel => "Fuel",
            ResourceKind::Catering => "Catering",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 风险等级 (Risk Tier)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,    // 正常
    Medium, // 关注
    High,   // 危险
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

// ==========================================
// 机型 (Aircraft Type)
// ==========================================
// 展示层下拉框的固定枚举; 未知机型原样保留, 走宽体基准
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AircraftType {
    A320,
    B737,
    A350,
    B777,
    Other(String),
}

impl AircraftType {
    /// 机型代码
    pub fn code(&self) -> &str {
        match self {
            AircraftType::A320 => "A320",
            AircraftType::B737 => "B737",
            AircraftType::A350 => "A350",
            AircraftType::B777 => "B777",
            AircraftType::Other(code) => code.as_str(),
        }
    }

    /// 从字符串解析机型（大小写不敏感, 未知代码保留为 Other）
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_uppercase();
        match normalized.as_str() {
            "A320" => AircraftType::A320,
            "B737" => AircraftType::B737,
            "A350" => AircraftType::A350,
            "B777" => AircraftType::B777,
            _ => AircraftType::Other(normalized),
        }
    }
}

impl Default for AircraftType {
    fn default() -> Self {
        AircraftType::A320
    }
}

impl From<String> for AircraftType {
    fn from(code: String) -> Self {
        AircraftType::from_code(&code)
    }
}

impl From<AircraftType> for String {
    fn from(aircraft: AircraftType) -> Self {
        aircraft.code().to_string()
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
