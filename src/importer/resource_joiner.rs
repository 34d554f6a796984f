// ==========================================
// 机坪地勤周转预测 - 三表联表 + 就绪度评分
// ==========================================
// 驱动表: 行李表（保持其行序）
// 规则: 配餐/燃油按去掩码航班号建索引（重复键后者覆盖）;
//       任一缺失则丢弃该行李记录, 不产生部分结果
// ==========================================

use crate::domain::flight::{DroppedRecord, FlightResource, JoinReport, UNKNOWN_AIRLINE};
use crate::domain::table::{CsvRecord, RawCsvTable};
use crate::domain::types::ResourceKind;
use crate::engine::readiness::ReadinessScorer;
use crate::importer::field_reader::{columns, unmask_flight_key, FieldReader};
use crate::importer::importer_trait::{JoinOutput, ResourceJoiner};
use std::collections::HashMap;

pub struct FlightResourceJoiner {
    scorer: ReadinessScorer,
}

impl FlightResourceJoiner {
    pub fn new(scorer: ReadinessScorer) -> Self {
        Self { scorer }
    }

    /// 按去掩码航班号建索引（后出现的记录覆盖先出现的）
    fn index_by_flight(records: Vec<CsvRecord>) -> HashMap<String, CsvRecord> {
        records
            .into_iter()
            .map(|record| (unmask_flight_key(record.get(columns::FLIGHT_ID)), record))
            .collect()
    }
}

impl Default for FlightResourceJoiner {
    fn default() -> Self {
        Self::new(ReadinessScorer::default())
    }
}

impl ResourceJoiner for FlightResourceJoiner {
    fn join(
        &self,
        baggage: &RawCsvTable,
        catering: &RawCsvTable,
        fuel: &RawCsvTable,
    ) -> JoinOutput {
        let catering_by_flight = Self::index_by_flight(catering.records());
        let fuel_by_flight = Self::index_by_flight(fuel.records());

        let mut baggage_reader = FieldReader::new(ResourceKind::Baggage);
        let mut catering_reader = FieldReader::new(ResourceKind::Catering);
        let mut fuel_reader = FieldReader::new(ResourceKind::Fuel);

        let mut report = JoinReport::default();
        let mut flights = Vec::new();

        for baggage_row in baggage.records() {
            report.baggage_rows += 1;

            let flight_id = unmask_flight_key(baggage_row.get(columns::FLIGHT_ID));
            let catering_row = catering_by_flight.get(&flight_id);
            let fuel_row = fuel_by_flight.get(&flight_id);

            let (catering_row, fuel_row) = match (catering_row, fuel_row) {
                (Some(c), Some(f)) => (c, f),
                (c, f) => {
                    let mut missing = Vec::new();
                    if c.is_none() {
                        missing.push(ResourceKind::Catering);
                    }
                    if f.is_none() {
                        missing.push(ResourceKind::Fuel);
                    }
                    tracing::debug!(
                        "行李表第 {} 行 {} 缺少联表记录 {:?}, 丢弃",
                        baggage_row.row_number,
                        flight_id,
                        missing
                    );
                    report.dropped.push(DroppedRecord {
                        row_number: baggage_row.row_number,
                        flight_id,
                        missing,
                    });
                    continue;
                }
            };

            // 行李: 卸载时长 + 件数
            let bag_count = baggage_reader.number(&baggage_row, columns::BAGS_COUNT);
            let unload_minutes = baggage_reader.duration(
                &baggage_row,
                columns::UNLOAD_START,
                columns::UNLOAD_END,
            );
            let baggage_readiness =
                self.scorer
                    .score(ResourceKind::Baggage, unload_minutes, bag_count);

            // 燃油: 加油时长 + 升数
            let fuel_liters = fuel_reader.number(fuel_row, columns::FUEL_LITERS);
            let fuel_minutes =
                fuel_reader.duration(fuel_row, columns::ARRIVAL_TIME, columns::FINISH_TIME);
            let fuel_readiness = self
                .scorer
                .score(ResourceKind::Fuel, fuel_minutes, fuel_liters);

            // 配餐: 装载时长 + 份数
            let meals = catering_reader.number(catering_row, columns::MEALS_QTY);
            let catering_minutes =
                catering_reader.duration(catering_row, columns::LOAD_START, columns::LOAD_FINISH);
            let catering_readiness =
                self.scorer
                    .score(ResourceKind::Catering, catering_minutes, meals);

            let airline = match unmask_flight_key(fuel_row.get(columns::AIRLINE)) {
                name if name.is_empty() => UNKNOWN_AIRLINE.to_string(),
                name => name,
            };

            flights.push(FlightResource {
                flight_id,
                airline,
                baggage_readiness,
                fuel_readiness,
                catering_readiness,
            });
        }

        report.joined = flights.len();
        report.defaulted.extend(baggage_reader.into_defaulted());
        report.defaulted.extend(fuel_reader.into_defaulted());
        report.defaulted.extend(catering_reader.into_defaulted());

        tracing::info!(
            "联表完成: 行李 {} 行, 成功 {} 个航班, 丢弃 {} 行, 默认值 {} 处",
            report.baggage_rows,
            report.joined,
            report.dropped.len(),
            report.defaulted.len()
        );

        JoinOutput { flights, report }
    }
}
