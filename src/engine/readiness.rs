// ==========================================
// 机坪地勤周转预测 - 资源就绪度评分
// ==========================================
// 职责: 按资源类型由作业时长与数量计算 0-100 就绪度
// 公式: 100 - duration_weight × 时长 - quantity_weight × 数量 / quantity_divisor
//       四舍五入（.5 向上）后截断到 [min_score, max_score]
// ==========================================

use crate::config::{ReadinessConfig, ResourceWeights};
use crate::domain::types::ResourceKind;

/// 四舍五入, .5 一律向正无穷方向进位
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// ==========================================
// ReadinessScorer - 就绪度评分器
// ==========================================
#[derive(Debug, Clone)]
pub struct ReadinessScorer {
    config: ReadinessConfig,
}

impl ReadinessScorer {
    pub fn new(config: ReadinessConfig) -> Self {
        Self { config }
    }

    /// 计算单项资源就绪度
    ///
    /// # 参数
    /// - `kind`: 资源类型
    /// - `duration_minutes`: 作业时长（分钟）
    /// - `quantity`: 数量（行李件数 / 燃油升数 / 餐食份数）
    ///
    /// # 返回
    /// [min_score, max_score] 范围内的整数
    pub fn score(&self, kind: ResourceKind, duration_minutes: i64, quantity: f64) -> i32 {
        let weights = self.weights(kind);
        let raw = 100.0
            - weights.duration_weight * duration_minutes as f64
            - weights.quantity_weight * quantity / weights.quantity_divisor;

        self.clamp(round_half_up(raw))
    }

    fn weights(&self, kind: ResourceKind) -> &ResourceWeights {
        match kind {
            ResourceKind::Baggage => &self.config.baggage,
            ResourceKind::Fuel => &self.config.fuel,
            ResourceKind::Catering => &self.config.catering,
        }
    }

    fn clamp(&self, value: f64) -> i32 {
        let min = f64::from(self.config.min_score);
        let max = f64::from(self.config.max_score);
        // NaN 落到下限
        if value.is_nan() {
            return self.config.min_score;
        }
        value.clamp(min, max) as i32
    }
}

impl Default for ReadinessScorer {
    fn default() -> Self {
        Self::new(ReadinessConfig::default())
    }
}
