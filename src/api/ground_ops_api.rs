// ==========================================
// 机坪地勤周转预测 - 展示层接口
// ==========================================
// 职责: 展示层唯一入口
//   - 航班下拉列表 / 就绪度摘要
//   - 三张原始表浏览视图
//   - 预测输入解析（航班回退、机型预选、延误截断）
//   - 带模拟延迟且可被取代的预测调用
//   - 延误成本曲线
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::EstimatorConfig;
use crate::domain::flight::{flight_prefix, FlightResource, JoinReport};
use crate::domain::prediction::{PredictionInput, PredictionOutcome};
use crate::domain::table::RawCsvTable;
use crate::domain::types::{AircraftType, ResourceKind};
use crate::engine::{CostPoint, PredictionService, TatEstimator, TatPredictor};
use crate::engine::ReadinessScorer;
use crate::importer::{FlightResourceJoiner, ResourceJoiner, SourceTables, SourceTexts};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// 原始表浏览视图（缺失单元格已替换为占位符）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub table: ResourceKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// ==========================================
// GroundOpsApi
// ==========================================
pub struct GroundOpsApi {
    tables: SourceTables,
    flights: Vec<FlightResource>,
    report: JoinReport,
    estimator: Arc<TatEstimator>,
    predictor: Arc<dyn TatPredictor>,
}

impl GroundOpsApi {
    /// 从三段内存文本构造
    pub fn from_texts(texts: SourceTexts, config: EstimatorConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self::from_tables(texts.parse()?, config))
    }

    /// 从数据目录下的三个 CSV 文件构造
    pub fn from_data_dir<P: AsRef<Path>>(dir: P, config: EstimatorConfig) -> ApiResult<Self> {
        config.validate()?;
        let tables = SourceTables::from_dir(dir, &config.source_files)?;
        Ok(Self::from_tables(tables, config))
    }

    /// 按配置构造: 先应用环境变量覆写, 再从 data_dir 加载
    ///
    /// # 环境变量
    /// - `GROUND_OPS_DATA_DIR`: 覆盖 data_dir
    /// - `GROUND_OPS_PREDICT_LATENCY_MS`: 覆盖模拟延迟
    pub fn from_config(config: EstimatorConfig) -> ApiResult<Self> {
        let config = config.with_env_overrides();
        let dir = config
            .data_dir
            .clone()
            .ok_or_else(|| ApiError::ConfigError("未配置 data_dir".to_string()))?;
        Self::from_data_dir(dir, config)
    }

    /// 从已解析的三张表构造
    ///
    /// # 流程
    /// 1. 联表 + 就绪度评分（一次性, 之后不可变）
    /// 2. 组装估算引擎与预测服务
    fn from_tables(tables: SourceTables, config: EstimatorConfig) -> Self {
        let joiner = FlightResourceJoiner::new(ReadinessScorer::new(config.readiness.clone()));
        let output = joiner.join(&tables.baggage, &tables.catering, &tables.fuel);

        if output.flights.is_empty() {
            tracing::warn!("联表结果为空, 预测功能不可用");
        }

        let estimator = Arc::new(TatEstimator::new(config));
        let predictor: Arc<dyn TatPredictor> =
            Arc::new(PredictionService::from_estimator(Arc::clone(&estimator)));

        Self {
            tables,
            flights: output.flights,
            report: output.report,
            estimator,
            predictor,
        }
    }

    /// 替换预测器（注入自定义实现）
    pub fn with_predictor(mut self, predictor: Arc<dyn TatPredictor>) -> Self {
        self.predictor = predictor;
        self
    }

    pub fn config(&self) -> &EstimatorConfig {
        self.estimator.config()
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 联表后的航班列表（行李表顺序）
    pub fn list_flights(&self) -> &[FlightResource] {
        &self.flights
    }

    /// 联表诊断报告
    pub fn join_report(&self) -> &JoinReport {
        &self.report
    }

    pub fn raw_table(&self, kind: ResourceKind) -> &RawCsvTable {
        self.tables.table(kind)
    }

    /// 原始表浏览视图
    pub fn table_view(&self, kind: ResourceKind) -> TableView {
        let table = self.raw_table(kind);
        TableView {
            table: kind,
            headers: table.headers.clone(),
            rows: table.display_rows(),
        }
    }

    /// 延误成本曲线
    pub fn delay_cost_curve(&self) -> Vec<CostPoint> {
        self.estimator.cost_curve()
    }

    // ==========================================
    // 输入解析
    // ==========================================

    /// 查找航班; 未找到回退到第一个航班
    pub fn resolve_flight(&self, flight_id: &str) -> ApiResult<&FlightResource> {
        let wanted = flight_id.trim();
        self.flights
            .iter()
            .find(|f| f.flight_id == wanted)
            .or_else(|| {
                let fallback = self.flights.first();
                if let Some(first) = fallback {
                    tracing::debug!("航班 {:?} 不存在, 回退到 {}", wanted, first.flight_id);
                }
                fallback
            })
            .ok_or(ApiError::NoFlightsAvailable)
    }

    /// 按航班号前缀推断机型
    pub fn aircraft_for_flight(&self, flight_id: &str) -> Option<AircraftType> {
        self.config()
            .aircraft_by_flight_prefix
            .get(flight_prefix(flight_id))
            .map(|code| AircraftType::from_code(code))
    }

    /// 初始输入: 第一个航班 + 默认机型 + 默认延误
    pub fn default_input(&self) -> ApiResult<PredictionInput> {
        let first = self.flights.first().ok_or(ApiError::NoFlightsAvailable)?;
        let config = self.config();
        Ok(PredictionInput::new(
            first.flight_id.clone(),
            AircraftType::from_code(&config.default_aircraft_type),
            config.default_arrival_delay_minutes,
        ))
    }

    /// 切换航班: 前缀已知时预选机型, 否则沿用当前机型
    pub fn select_flight(&self, current: &PredictionInput, flight_id: &str) -> PredictionInput {
        let aircraft_type = self
            .aircraft_for_flight(flight_id)
            .unwrap_or_else(|| current.aircraft_type.clone());

        PredictionInput {
            flight_id: flight_id.to_string(),
            aircraft_type,
            arrival_delay_minutes: current.arrival_delay_minutes,
        }
    }

    /// 规范化输入: 航班回退 + 延误截断到 [0, max_arrival_delay_minutes]
    pub fn normalize_input(
        &self,
        input: PredictionInput,
    ) -> ApiResult<(PredictionInput, FlightResource)> {
        let flight = self.resolve_flight(&input.flight_id)?.clone();

        let max_delay = self.config().max_arrival_delay_minutes;
        let delay = input.arrival_delay_minutes.min(max_delay);
        if delay != input.arrival_delay_minutes {
            tracing::debug!(
                "到港延误 {} 超出上限, 截断为 {}",
                input.arrival_delay_minutes,
                delay
            );
        }

        let normalized = PredictionInput {
            flight_id: flight.flight_id.clone(),
            aircraft_type: input.aircraft_type,
            arrival_delay_minutes: delay,
        };

        Ok((normalized, flight))
    }

    // ==========================================
    // 预测
    // ==========================================

    /// 发起预测（模拟延迟后返回）
    ///
    /// # 返回
    /// - Ok(PredictionOutcome): 预测结果
    /// - Err(NoFlightsAvailable): 无可用航班
    /// - Err(Superseded): 等待期间被更新的请求取代
    pub async fn predict(&self, input: PredictionInput) -> ApiResult<PredictionOutcome> {
        let (input, flight) = self.normalize_input(input)?;
        let outcome = self.predictor.predict(input, flight).await?;
        Ok(outcome)
    }

    /// 是否有预测正在处理（展示层据此禁用按钮）
    pub fn is_predicting(&self) -> bool {
        self.predictor.is_pending()
    }

    /// 取消在途预测（输入变化时调用）
    pub fn cancel_pending(&self) {
        self.predictor.cancel_pending();
    }
}
