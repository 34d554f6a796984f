// ==========================================
// 机坪地勤周转预测 - TAT 估算引擎
// ==========================================
// 职责: 基准 TAT / 附加延误 / 风险分级 / 瓶颈判定 / 成本 / 概率
// 输入: PredictionInput + FlightResource
// 输出: PredictionResult
// 说明: 纯计算, 无状态, 无 I/O
// ==========================================

use crate::config::EstimatorConfig;
use crate::domain::flight::FlightResource;
use crate::domain::prediction::{PredictionInput, PredictionResult};
use crate::domain::types::{AircraftType, ResourceKind, RiskTier};
use crate::engine::readiness::round_half_up;
use serde::{Deserialize, Serialize};

/// 单次估算结果（含基准 TAT, 供展示层计算差值）
#[derive(Debug, Clone, PartialEq)]
pub struct TatEstimate {
    pub base_tat: i32,
    pub result: PredictionResult,
}

/// 成本曲线采样点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub minutes: u32,
    pub cost: f64,
}

// ==========================================
// TatEstimator - TAT 估算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct TatEstimator {
    config: EstimatorConfig,
}

impl TatEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 估算单个航班的 TAT
    ///
    /// # 参数
    /// - `input`: 预测输入（机型 + 到港延误）
    /// - `flight`: 已解析的航班资源就绪度
    ///
    /// # 返回
    /// TatEstimate (基准 TAT + 预测结果)
    pub fn estimate(&self, input: &PredictionInput, flight: &FlightResource) -> TatEstimate {
        let delay = input.arrival_delay_minutes;

        // 1. 基准 TAT
        let base_tat = self.base_tat(&input.aircraft_type);

        // 2. 附加延误 + 最终 TAT
        let added = self.added_delay(delay, flight);
        let tat = round_half_up(f64::from(base_tat) + added) as i32;

        // 3. 风险分级
        let risk = self.classify_risk(delay, flight.catering_readiness, tat, base_tat);

        // 4. 瓶颈 / 成本 / 概率
        let result = PredictionResult {
            tat,
            risk,
            cost: self.delay_cost(tat, base_tat),
            probability: self.probability(risk),
            bottleneck: select_bottleneck(flight),
        };

        tracing::debug!(
            flight_id = %flight.flight_id,
            aircraft = %input.aircraft_type,
            delay,
            base_tat,
            tat,
            risk = %risk,
            "TAT 估算完成"
        );

        TatEstimate { base_tat, result }
    }

    /// 基准 TAT: 窄体机型 → narrow_body_base_tat, 其余（含未知）→ wide_body_base_tat
    pub fn base_tat(&self, aircraft: &AircraftType) -> i32 {
        let is_narrow_body = self
            .config
            .tat
            .narrow_body_types
            .iter()
            .any(|code| code.eq_ignore_ascii_case(aircraft.code()));

        if is_narrow_body {
            self.config.tat.narrow_body_base_tat
        } else {
            self.config.tat.wide_body_base_tat
        }
    }

    /// 附加延误（分钟, 未取整）
    pub fn added_delay(&self, arrival_delay_minutes: u32, flight: &FlightResource) -> f64 {
        let tat = &self.config.tat;
        let gap = |readiness: i32| f64::from(100 - readiness);

        f64::from(arrival_delay_minutes) * tat.arrival_delay_weight
            + gap(flight.baggage_readiness) * tat.baggage_gap_weight
            + gap(flight.fuel_readiness) * tat.fuel_gap_weight
            + gap(flight.catering_readiness) * tat.catering_gap_weight
    }

    /// 风险分级（按顺序判定, 首条命中即返回）
    ///
    /// 1. 到港延误 > 阈值 且 配餐就绪度 < 阈值 → High
    /// 2. finalTat > base + margin → Medium
    /// 3. 其余 → Low
    pub fn classify_risk(
        &self,
        arrival_delay_minutes: u32,
        catering_readiness: i32,
        final_tat: i32,
        base_tat: i32,
    ) -> RiskTier {
        let risk = &self.config.risk;

        if arrival_delay_minutes > risk.high_delay_threshold
            && catering_readiness < risk.high_catering_threshold
        {
            RiskTier::High
        } else if final_tat > base_tat + risk.medium_tat_margin {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// 延误成本: max(0, (finalTat - base) × 每分钟成本)
    pub fn delay_cost(&self, final_tat: i32, base_tat: i32) -> f64 {
        let over_minutes = (final_tat - base_tat).max(0);
        f64::from(over_minutes) * self.config.delay_cost_per_minute
    }

    /// 风险等级对应的固定概率（非统计意义）
    pub fn probability(&self, risk: RiskTier) -> u32 {
        match risk {
            RiskTier::High => self.config.risk.probability_high,
            RiskTier::Medium => self.config.risk.probability_medium,
            RiskTier::Low => self.config.risk.probability_low,
        }
    }

    /// 延误成本曲线（0..=max, 按步长采样）
    pub fn cost_curve(&self) -> Vec<CostPoint> {
        let step = self.config.cost_curve_step_minutes.max(1) as usize;
        (0..=self.config.cost_curve_max_minutes)
            .step_by(step)
            .map(|minutes| CostPoint {
                minutes,
                cost: f64::from(minutes) * self.config.delay_cost_per_minute,
            })
            .collect()
    }
}

impl Default for TatEstimator {
    fn default() -> Self {
        Self::new(EstimatorConfig::default())
    }
}

/// 瓶颈判定
///
/// 初始为 Baggage; Fuel 等于最小值时覆盖; Catering 等于最小值时再覆盖.
/// Catering 最后检查, 平局时总是胜出.
pub fn select_bottleneck(flight: &FlightResource) -> ResourceKind {
    let min = flight.min_readiness();

    let mut bottleneck = ResourceKind::Baggage;
    if flight.fuel_readiness == min {
        bottleneck = ResourceKind::Fuel;
    }
    if flight.catering_readiness == min {
        bottleneck = ResourceKind::Catering;
    }
    bottleneck
}

/// 调度建议文案; Low 风险不给建议
pub fn recommendation(result: &PredictionResult, flight_id: &str) -> Option<String> {
    if result.risk == RiskTier::Low {
        return None;
    }

    Some(format!(
        "Reallocate {} crew for {} to mitigate projected delay.",
        result.bottleneck.as_str().to_lowercase(),
        flight_id
    ))
}
