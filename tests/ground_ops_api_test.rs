// ==========================================
// GroundOpsApi 集成测试
// ==========================================
// 测试目标: 展示层入口的完整流程
// 覆盖范围: 数据目录加载 / 航班列表 / 表格视图 / 输入解析 / 预测 / 请求取代
// ==========================================


use ground_ops_tat::api::{ApiError, GroundOpsApi};
use ground_ops_tat::config::EstimatorConfig;
use ground_ops_tat::domain::{AircraftType, PredictionInput, ResourceKind, RiskTier};
use ground_ops_tat::importer::SourceTexts;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use test_helpers::{fixture_dir, load_fixture_texts, sample_texts, test_config};

fn fixture_api() -> GroundOpsApi {
    ground_ops_tat::logging::init_test();
    GroundOpsApi::from_data_dir(fixture_dir(), test_config()).unwrap()
}

#[test]
fn test_list_flights_and_report() {
    let api = fixture_api();

    let ids: Vec<&str> = api.list_flights().iter().map(|f| f.flight_id.as_str()).collect();
    assert_eq!(ids, vec!["SO-101", "AM-202", "DE-303"]);
    assert_eq!(api.join_report().dropped_missing(ResourceKind::Catering), 1);
    assert_eq!(api.join_report().dropped_missing(ResourceKind::Fuel), 1);
}

#[test]
fn test_table_view_uses_placeholder() {
    let texts = SourceTexts::new(
        "Flight_ID,Bags_Count,Unload_Start,Unload_End\nSO-101*,40",
        load_fixture_texts().catering,
        load_fixture_texts().fuel,
    );
    let api = GroundOpsApi::from_texts(texts, test_config()).unwrap();

    let view = api.table_view(ResourceKind::Baggage);
    assert_eq!(view.headers.len(), 4);
    assert_eq!(view.rows[0], vec!["SO-101*", "40", "-", "-"]);

    // 原始表保留掩码, 不做类型转换
    assert_eq!(api.raw_table(ResourceKind::Fuel).rows[1][4], "Air*Asia");
}

#[test]
fn test_default_input_and_flight_selection() {
    let api = fixture_api();

    let input = api.default_input().unwrap();
    assert_eq!(input.flight_id, "SO-101");
    assert_eq!(input.aircraft_type, AircraftType::A320);
    assert_eq!(input.arrival_delay_minutes, 5);

    // 前缀 DE → B777
    let selected = api.select_flight(&input, "DE-303");
    assert_eq!(selected.flight_id, "DE-303");
    assert_eq!(selected.aircraft_type, AircraftType::B777);
    assert_eq!(selected.arrival_delay_minutes, 5);

    // 未知前缀沿用当前机型
    let mut current = selected.clone();
    current.aircraft_type = AircraftType::A350;
    let unknown = api.select_flight(&current, "ZZ-1");
    assert_eq!(unknown.aircraft_type, AircraftType::A350);
}

#[test]
fn test_resolve_flight_falls_back_to_first() {
    let api = fixture_api();
    assert_eq!(api.resolve_flight("AM-202").unwrap().flight_id, "AM-202");
    assert_eq!(api.resolve_flight(" AM-202 ").unwrap().flight_id, "AM-202");
    assert_eq!(api.resolve_flight("NOPE").unwrap().flight_id, "SO-101");
    assert_eq!(api.resolve_flight("").unwrap().flight_id, "SO-101");
}

#[test]
fn test_normalize_input_clamps_delay() {
    let api = fixture_api();
    let (input, flight) = api
        .normalize_input(PredictionInput::new("missing", AircraftType::A320, 500))
        .unwrap();

    assert_eq!(input.flight_id, "SO-101");
    assert_eq!(flight.flight_id, "SO-101");
    assert_eq!(input.arrival_delay_minutes, 120);
}

#[tokio::test]
async fn test_predict_end_to_end() {
    let api = GroundOpsApi::from_texts(sample_texts(), test_config()).unwrap();

    let outcome = api
        .predict(PredictionInput::new("SO-101", AircraftType::A320, 10))
        .await
        .unwrap();

    assert_eq!(outcome.base_tat, 45);
    assert_eq!(outcome.result.tat, 77);
    assert_eq!(outcome.result.risk, RiskTier::Medium);
    assert_eq!(outcome.result.cost, 2080.0);
    assert_eq!(outcome.result.probability, 45);
    assert_eq!(outcome.result.bottleneck, ResourceKind::Catering);
    assert_eq!(outcome.flight.airline, "IndiGo");
    assert!(!api.is_predicting());
}

#[tokio::test]
async fn test_predict_fixture_flights() {
    let api = fixture_api();

    let de = api
        .predict(PredictionInput::new("DE-303", AircraftType::B777, 20))
        .await
        .unwrap();
    // 60 + 16 + 9.4 + 9 + 15 = 109.4 → 109
    assert_eq!(de.result.tat, 109);
    assert_eq!(de.result.risk, RiskTier::High);
    assert_eq!(de.result.probability, 85);
    assert_eq!(de.result.cost, 49.0 * 65.0);
    assert_eq!(de.result.bottleneck, ResourceKind::Catering);
    assert_eq!(
        de.recommendation.as_deref(),
        Some("Reallocate catering crew for DE-303 to mitigate projected delay.")
    );

    let am = api
        .predict(PredictionInput::new("AM-202", AircraftType::A320, 0))
        .await
        .unwrap();
    // 45 + 5.4 + 4.05 + 9.25 = 63.7 → 64
    assert_eq!(am.result.tat, 64);
    assert_eq!(am.result.risk, RiskTier::Medium);
    assert_eq!(am.result.cost, 19.0 * 65.0);
}

#[tokio::test]
async fn test_low_risk_has_no_recommendation() {
    let texts = SourceTexts::new(
        "Flight_ID,Bags_Count,Unload_Start,Unload_End\nAM-1,0,08:00,08:00",
        "Flight_ID,Meals_Qty,Load_Start,Load_Finish\nAM-1,0,08:00,08:00",
        "Flight_ID,Fuel_Liters,Arrival_Time,Finish_Time,Airline\nAM-1,0,08:00,08:00,X",
    );
    let ready_api = GroundOpsApi::from_texts(texts, test_config()).unwrap();

    let outcome = ready_api
        .predict(PredictionInput::new("AM-1", AircraftType::A320, 0))
        .await
        .unwrap();
    assert_eq!(outcome.result.risk, RiskTier::Low);
    assert_eq!(outcome.recommendation, None);
}

#[tokio::test(start_paused = true)]
async fn test_newer_prediction_supersedes_older() {
    let config = EstimatorConfig {
        prediction_latency_ms: 1200,
        ..EstimatorConfig::default()
    };
    let api = GroundOpsApi::from_data_dir(fixture_dir(), config).unwrap();

    let older = api.predict(PredictionInput::new("SO-101", AircraftType::A320, 10));
    let newer = api.predict(PredictionInput::new("DE-303", AircraftType::B777, 20));
    let (older, newer) = tokio::join!(older, newer);

    let err = older.unwrap_err();
    assert!(err.is_superseded());

    let newer = newer.unwrap();
    assert_eq!(newer.input.flight_id, "DE-303");
    assert!(!api.is_predicting());
}

#[tokio::test(start_paused = true)]
async fn test_prediction_waits_for_latency() {
    let config = EstimatorConfig {
        prediction_latency_ms: 1200,
        ..EstimatorConfig::default()
    };
    let api = GroundOpsApi::from_data_dir(fixture_dir(), config).unwrap();

    let started = tokio::time::Instant::now();
    let outcome = api
        .predict(PredictionInput::new("SO-101", AircraftType::A320, 10))
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1200));
    assert_eq!(outcome.result.tat, 77);
}

#[tokio::test]
async fn test_no_flights_available() {
    let texts = SourceTexts::new(
        "Flight_ID,Bags_Count,Unload_Start,Unload_End\nSO-101,1,08:00,08:10",
        "Flight_ID,Meals_Qty,Load_Start,Load_Finish",
        "",
    );
    let api = GroundOpsApi::from_texts(texts, test_config()).unwrap();

    assert!(api.list_flights().is_empty());
    assert!(matches!(api.default_input(), Err(ApiError::NoFlightsAvailable)));

    let result = api
        .predict(PredictionInput::new("SO-101", AircraftType::A320, 0))
        .await;
    assert!(matches!(result, Err(ApiError::NoFlightsAvailable)));
}

#[test]
fn test_from_data_dir_custom_file_names() {
    let dir = tempdir().unwrap();
    let texts = sample_texts();
    fs::write(dir.path().join("bags.csv"), &texts.baggage).unwrap();
    fs::write(dir.path().join("meals.csv"), &texts.catering).unwrap();
    fs::write(dir.path().join("fuel.csv"), &texts.fuel).unwrap();

    let mut config = test_config();
    config.source_files.baggage = "bags.csv".to_string();
    config.source_files.catering = "meals.csv".to_string();
    config.source_files.fuel = "fuel.csv".to_string();
    config.data_dir = Some(dir.path().display().to_string());

    let api = GroundOpsApi::from_config(config).unwrap();
    assert_eq!(api.list_flights().len(), 1);
}

#[test]
fn test_from_config_requires_data_dir() {
    let result = GroundOpsApi::from_config(test_config());
    assert!(matches!(result, Err(ApiError::ConfigError(msg)) if msg.contains("data_dir")));
}

#[test]
fn test_from_data_dir_missing_file_is_import_error() {
    let dir = tempdir().unwrap();
    let result = GroundOpsApi::from_data_dir(dir.path(), test_config());
    assert!(matches!(result, Err(ApiError::ImportError(msg)) if msg.contains("baggage_flow.csv")));
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = test_config();
    config.readiness.min_score = 101;
    let result = GroundOpsApi::from_texts(sample_texts(), config);
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}

#[test]
fn test_delay_cost_curve() {
    let curve = fixture_api().delay_cost_curve();
    assert_eq!(curve.len(), 13);
    assert_eq!(curve[3].minutes, 15);
    assert_eq!(curve[3].cost, 975.0);
}
