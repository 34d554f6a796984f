// ==========================================
// 机坪地勤周转预测 - 字段读取器
// ==========================================
// 职责: 源列名常量 / 航班键去掩码 / 数值与时长的容错读取
// 容错: 空值或非数字 → 0, 时间无法解析 → 0 分钟; 每次取默认值都记录在案
// ==========================================

use crate::domain::flight::{DefaultReason, DefaultedField};
use crate::domain::table::CsvRecord;
use crate::domain::types::ResourceKind;
use crate::importer::time_parser::{duration_minutes, parse_minutes};

/// 航班键掩码字符
pub const MASK_CHAR: char = '*';

// ==========================================
// 源表列名
// ==========================================
pub mod columns {
    pub const FLIGHT_ID: &str = "Flight_ID";

    // 行李表
    pub const BAGS_COUNT: &str = "Bags_Count";
    pub const UNLOAD_START: &str = "Unload_Start";
    pub const UNLOAD_END: &str = "Unload_End";

    // 配餐表
    pub const MEALS_QTY: &str = "Meals_Qty";
    pub const LOAD_START: &str = "Load_Start";
    pub const LOAD_FINISH: &str = "Load_Finish";

    // 燃油表
    pub const FUEL_LITERS: &str = "Fuel_Liters";
    pub const ARRIVAL_TIME: &str = "Arrival_Time";
    pub const FINISH_TIME: &str = "Finish_Time";
    pub const AIRLINE: &str = "Airline";
}

/// 去掉全部掩码字符并去首尾空白（幂等）
pub fn unmask_flight_key(value: &str) -> String {
    value.replace(MASK_CHAR, "").trim().to_string()
}

// ==========================================
// FieldReader - 容错字段读取
// ==========================================
pub struct FieldReader {
    table: ResourceKind,
    defaulted: Vec<DefaultedField>,
}

impl FieldReader {
    pub fn new(table: ResourceKind) -> Self {
        Self {
            table,
            defaulted: Vec::new(),
        }
    }

    /// 读取数值字段; 空值或无法解析时返回 0
    pub fn number(&mut self, record: &CsvRecord, column: &str) -> f64 {
        let raw = record.get(column).trim();
        if raw.is_empty() {
            self.record_default(record, column, raw, DefaultReason::MissingValue);
            return 0.0;
        }

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.record_default(record, column, raw, DefaultReason::UnparsableNumber);
                0.0
            }
        }
    }

    /// 读取时长 (end - start, 分钟); 任一端无法解析按 0 分钟参与计算
    pub fn duration(&mut self, record: &CsvRecord, start_column: &str, end_column: &str) -> i64 {
        let start = record.get(start_column);
        let end = record.get(end_column);

        if parse_minutes(start).is_none() {
            self.record_default(record, start_column, start, DefaultReason::UnparsableTime);
        }
        if parse_minutes(end).is_none() {
            self.record_default(record, end_column, end, DefaultReason::UnparsableTime);
        }

        duration_minutes(start, end)
    }

    /// 取出累计的默认值事件
    pub fn into_defaulted(self) -> Vec<DefaultedField> {
        self.defaulted
    }

    fn record_default(
        &mut self,
        record: &CsvRecord,
        column: &str,
        raw_value: &str,
        reason: DefaultReason,
    ) {
        tracing::debug!(
            "{} 表第 {} 行字段 {} 取默认值 ({:?}): {:?}",
            self.table,
            record.row_number,
            column,
            reason,
            raw_value
        );

        self.defaulted.push(DefaultedField {
            table: self.table,
            row_number: record.row_number,
            column: column.to_string(),
            raw_value: raw_value.to_string(),
            reason,
        });
    }
}
