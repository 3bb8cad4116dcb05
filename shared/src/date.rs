//! 时间显示辅助
//!
//! 后端以 RFC 3339 字符串传输时间，反序列化为 `DateTime<Utc>`，
//! 这里只负责转换为界面上的文本。

use chrono::{DateTime, Utc};

/// `2024-01-15`
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// 可选时间，缺失时显示占位符
pub fn format_date_opt(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// 下载文件名用的日期后缀
pub fn file_stamp(now: &DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let ts: DateTime<Utc> = "2024-01-15T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "2024-01-15");
        assert_eq!(format_date_opt(None), "—");
    }
}
