// ==========================================
// 机坪地勤周转预测 - 预测服务（模拟延迟 + 请求取代）
// ==========================================
// 职责: 在估算结果前加一次性人为延迟, 模拟"处理中"
// 并发: 代际计数器 (generation); 新请求使旧请求的在途结果失效
// 取消: 丢弃返回的 future 即取消等待; cancel_pending() 使全部在途请求失效
// ==========================================

use crate::domain::flight::FlightResource;
use crate::domain::prediction::{PredictionInput, PredictionOutcome};
use crate::engine::tat_estimator::{recommendation, TatEstimator};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

// ==========================================
// 预测错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("预测请求已被取代: request_id={request_id}, generation={generation}, latest={latest}")]
    Superseded {
        request_id: String,
        generation: u64,
        latest: u64,
    },
}

// ==========================================
// TatPredictor Trait
// ==========================================
// 实现者: PredictionService
#[async_trait]
pub trait TatPredictor: Send + Sync {
    /// 发起一次预测
    ///
    /// # 返回
    /// - Ok(PredictionOutcome): 本请求仍为最新, 返回结果
    /// - Err(Superseded): 等待期间有更新的请求
    async fn predict(
        &self,
        input: PredictionInput,
        flight: FlightResource,
    ) -> Result<PredictionOutcome, PredictionError>;

    /// 是否有未结束的最新请求
    fn is_pending(&self) -> bool;

    /// 使全部在途请求失效
    fn cancel_pending(&self);
}

// ==========================================
// PredictionService
// ==========================================
pub struct PredictionService {
    estimator: Arc<TatEstimator>,
    latency: Duration,
    issued: AtomicU64,  // 最新发出的代际
    settled: AtomicU64, // 已结束（完成/取代/取消）的最高代际
}

impl PredictionService {
    pub fn new(estimator: Arc<TatEstimator>, latency: Duration) -> Self {
        Self {
            estimator,
            latency,
            issued: AtomicU64::new(0),
            settled: AtomicU64::new(0),
        }
    }

    /// 按配置中的 prediction_latency_ms 构造
    pub fn from_estimator(estimator: Arc<TatEstimator>) -> Self {
        let latency = Duration::from_millis(estimator.config().prediction_latency_ms);
        Self::new(estimator, latency)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn latest_generation(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

/// 离开作用域时把本代际记为已结束（含 future 被丢弃的情况）
struct SettleGuard<'a> {
    settled: &'a AtomicU64,
    generation: u64,
}

impl Drop for SettleGuard<'_> {
    fn drop(&mut self) {
        self.settled.fetch_max(self.generation, Ordering::SeqCst);
    }
}

#[async_trait]
impl TatPredictor for PredictionService {
    async fn predict(
        &self,
        input: PredictionInput,
        flight: FlightResource,
    ) -> Result<PredictionOutcome, PredictionError> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = SettleGuard {
            settled: &self.settled,
            generation,
        };
        let request_id = Uuid::new_v4().to_string();

        tracing::info!(
            request_id = %request_id,
            generation,
            flight_id = %input.flight_id,
            "预测请求已受理, 等待 {} ms",
            self.latency.as_millis()
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let latest = self.issued.load(Ordering::SeqCst);
        if latest != generation {
            tracing::warn!(
                request_id = %request_id,
                generation,
                latest,
                "预测请求已被更新的请求取代, 丢弃结果"
            );
            return Err(PredictionError::Superseded {
                request_id,
                generation,
                latest,
            });
        }

        let estimate = self.estimator.estimate(&input, &flight);
        let recommendation = recommendation(&estimate.result, &input.flight_id);

        tracing::info!(
            request_id = %request_id,
            tat = estimate.result.tat,
            risk = %estimate.result.risk,
            bottleneck = %estimate.result.bottleneck,
            "预测完成"
        );

        Ok(PredictionOutcome {
            request_id,
            generation,
            input,
            flight,
            base_tat: estimate.base_tat,
            result: estimate.result,
            recommendation,
            generated_at: Utc::now().naive_utc(),
        })
    }

    fn is_pending(&self) -> bool {
        self.issued.load(Ordering::SeqCst) > self.settled.load(Ordering::SeqCst)
    }

    fn cancel_pending(&self) {
        // 占用一个新代际, 使全部在途请求失效
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.settled.fetch_max(generation, Ordering::SeqCst);
        tracing::debug!(generation, "在途预测请求已取消");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{AircraftType, RiskTier};

    fn flight() -> FlightResource {
        FlightResource {
            flight_id: "SO-101".to_string(),
            airline: "IndiGo".to_string(),
            baggage_readiness: 74,
            fuel_readiness: 58,
            catering_readiness: 49,
        }
    }

    fn service(latency_ms: u64) -> PredictionService {
        PredictionService::new(
            Arc::new(TatEstimator::default()),
            Duration::from_millis(latency_ms),
        )
    }

    #[tokio::test]
    async fn test_predict_zero_latency() {
        let service = service(0);
        let input = PredictionInput::new("SO-101", AircraftType::A320, 10);

        let outcome = service.predict(input, flight()).await.unwrap();
        assert_eq!(outcome.result.tat, 77);
        assert_eq!(outcome.result.risk, RiskTier::Medium);
        assert_eq!(outcome.generation, 1);
        assert!(outcome.recommendation.is_some());
        assert_eq!(service.latest_generation(), 1);
        assert!(!service.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_request_supersedes_older() {
        let service = service(1200);
        let first = service.predict(
            PredictionInput::new("SO-101", AircraftType::A320, 10),
            flight(),
        );
        let second = service.predict(
            PredictionInput::new("SO-101", AircraftType::B777, 10),
            flight(),
        );

        let (first, second) = tokio::join!(first, second);

        assert!(matches!(
            first,
            Err(PredictionError::Superseded { generation: 1, latest: 2, .. })
        ));
        let second = second.unwrap();
        assert_eq!(second.base_tat, 60);
        assert_eq!(second.generation, service.latest_generation());
        assert_eq!(service.latest_generation(), 2);
        assert!(!service.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_invalidates_in_flight() {
        let service = Arc::new(service(1200));

        let task = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .predict(
                        PredictionInput::new("SO-101", AircraftType::A320, 10),
                        flight(),
                    )
                    .await
            })
        };

        // 让任务先登记代际
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(service.is_pending());

        service.cancel_pending();
        assert_eq!(service.latest_generation(), 2);
        assert!(!service.is_pending());

        let result = task.await.unwrap();
        assert!(matches!(result, Err(PredictionError::Superseded { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_future_settles() {
        let service = service(1200);
        {
            let pending = service.predict(
                PredictionInput::new("SO-101", AircraftType::A320, 10),
                flight(),
            );
            // 超时即丢弃 future
            let timed_out =
                tokio::time::timeout(Duration::from_millis(100), pending).await;
            assert!(timed_out.is_err());
        }
        assert!(!service.is_pending());
    }
}
