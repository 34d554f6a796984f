// ==========================================
// 机坪地勤周转预测 - 时间字段解析
// ==========================================
// 支持: H:MM / HH:MM / HH:MM:SS, 可选 AM/PM 后缀（大小写不敏感）
// 容错: 无法匹配按 0 分钟处理, 不报错
// 数字: 仅 ASCII 0-9
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

/// 一天的分钟数（跨夜回绕）
pub const MINUTES_PER_DAY: i64 = 24 * 60;

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}):([0-9]{2})(?::[0-9]{2})?\s*(AM|PM)?").expect("时间匹配正则非法")
});

/// 解析为自午夜起的分钟数; 无法匹配返回 None
///
/// # 规则
/// - 12 AM → 0 时
/// - 12 PM 保持 12 时
/// - 其他 PM 小时 +12
/// - 秒数忽略
pub fn parse_minutes(value: &str) -> Option<i64> {
    let caps = TIME_PATTERN.captures(value.trim())?;

    let mut hour: i64 = caps.get(1)?.as_str().parse().ok()?;
    let minute: i64 = caps.get(2)?.as_str().parse().ok()?;
    let meridiem = caps.get(3).map(|m| m.as_str().to_uppercase());

    match meridiem.as_deref() {
        Some("AM") if hour == 12 => hour = 0,
        Some("PM") if hour != 12 => hour += 12,
        _ => {}
    }

    Some(hour * 60 + minute)
}

/// 解析为分钟数, 无法匹配按 0 处理
pub fn to_minutes(value: &str) -> i64 {
    parse_minutes(value).unwrap_or(0)
}

/// 计算两个时间之间的时长（分钟）
///
/// # 规则
/// - end < start 视为跨夜, end + 1440
/// - 结果下限为 0
pub fn duration_minutes(start: &str, end: &str) -> i64 {
    let start_value = to_minutes(start);
    let mut end_value = to_minutes(end);
    if end_value < start_value {
        end_value += MINUTES_PER_DAY;
    }
    (end_value - start_value).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_24h_formats() {
        assert_eq!(parse_minutes("8:05"), Some(485));
        assert_eq!(parse_minutes("08:05"), Some(485));
        assert_eq!(parse_minutes("08:05:59"), Some(485));
        assert_eq!(parse_minutes("23:50"), Some(1430));
    }

    #[test]
    fn test_parse_meridiem() {
        assert_eq!(parse_minutes("12:00 AM"), Some(0));
        assert_eq!(parse_minutes("12:30 PM"), Some(750));
        assert_eq!(parse_minutes("1:00 PM"), Some(780));
        assert_eq!(parse_minutes("1:00pm"), Some(780));
        assert_eq!(parse_minutes("11:15 am"), Some(675));
    }

    #[test]
    fn test_parse_failure_is_zero() {
        assert_eq!(parse_minutes("n/a"), None);
        assert_eq!(parse_minutes(""), None);
        assert_eq!(to_minutes("garbage"), 0);
    }

    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        // 阿拉伯-印度数字不参与匹配, 取后面的 ASCII 时间
        assert_eq!(parse_minutes("\u{660}\u{668}:\u{663}\u{660} 09:15"), Some(555));
        assert_eq!(parse_minutes("\u{660}\u{668}:\u{663}\u{660}"), None);
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(duration_minutes("08:00", "08:30"), 30);
        assert_eq!(duration_minutes("1:00 PM", "2:00 PM"), 60);
    }

    #[test]
    fn test_duration_overnight_wrap() {
        assert_eq!(duration_minutes("23:50", "00:10"), 20);
        assert_eq!(duration_minutes("11:50 PM", "12:10 AM"), 20);
    }

    #[test]
    fn test_duration_unparsable_side() {
        // start 无法解析 → 0 分钟
        assert_eq!(duration_minutes("", "00:45"), 45);
        // end 无法解析 → 0 分钟, 回绕后 1440 - start
        assert_eq!(duration_minutes("23:00", "?"), 60);
        assert_eq!(duration_minutes("", ""), 0);
    }

    #[test]
    fn test_duration_never_negative() {
        // 超出一天范围的异常小时数, 回绕后仍为负 → 0
        assert_eq!(duration_minutes("99:00", "00:00"), 0);
    }
}
