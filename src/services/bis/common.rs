//! 公共常量和辅助函数

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::BisError;

// ==================== BIS SDMX API 常量 ====================

/// 默认数据上下文
pub const DEFAULT_CONTEXT: &str = "dataflow";
/// 默认发布机构
pub const DEFAULT_AGENCY: &str = "BIS";
/// 默认数据流版本（+ 表示最新版本）
pub const DEFAULT_VERSION: &str = "+";
/// 默认资源 ID（非金融部门信贷总量）
pub const DEFAULT_RESOURCE_ID: &str = "WS_TC";
/// 表格接口默认筛选键（空串返回全部国家）
pub const DEFAULT_TABLE_KEY: &str = "";
/// 图表接口默认筛选键（中国、欧元区、日本、美国）
pub const DEFAULT_CHART_KEY: &str = "Q.CN+XM+JP+US.N.A.M.USD.A";
/// 图表标题
pub const CHART_TITLE: &str = "BIS Data";

/// 解析季度期间标签（如 "2020-Q1"），返回该季度首日
///
/// 标签不符合 YYYY-Qn 语法时返回 `DateParse` 错误
pub fn parse_quarter_label(label: &str) -> Result<NaiveDate, BisError> {
    let re = Regex::new(r"^(\d{4})-Q([1-4])$").unwrap();
    let caps = re
        .captures(label.trim())
        .ok_or_else(|| BisError::DateParse(label.to_string()))?;

    let year: i32 = caps[1].parse().map_err(|_| BisError::DateParse(label.to_string()))?;
    let quarter: u32 = caps[2].parse().map_err(|_| BisError::DateParse(label.to_string()))?;

    NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)
        .ok_or_else(|| BisError::DateParse(label.to_string()))
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试季度标签解析
    #[test]
    fn test_parse_quarter_label() {
        println!("\n========== 测试季度标签解析 ==========");
        let cases = vec![
            ("2020-Q1", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            ("2020-Q2", NaiveDate::from_ymd_opt(2020, 4, 1).unwrap()),
            ("2020-Q3", NaiveDate::from_ymd_opt(2020, 7, 1).unwrap()),
            ("2020-Q4", NaiveDate::from_ymd_opt(2020, 10, 1).unwrap()),
            ("1999-Q4", NaiveDate::from_ymd_opt(1999, 10, 1).unwrap()),
        ];

        for (label, expected) in &cases {
            let date = parse_quarter_label(label).unwrap();
            println!("  {} -> {}", label, date);
            assert_eq!(date, *expected);
        }
        println!("✅ 季度标签解析测试通过！");
    }

    /// 测试非法季度标签
    #[test]
    fn test_parse_quarter_label_invalid() {
        println!("\n========== 测试非法季度标签 ==========");
        let bad_labels = vec!["2020-Q5", "2020Q1", "2020-01", "Q1-2020", "abc", ""];

        for label in &bad_labels {
            let result = parse_quarter_label(label);
            println!("  {:?} -> {:?}", label, result.as_ref().err().map(|e| e.to_string()));
            assert!(matches!(result, Err(BisError::DateParse(_))), "{} 应该解析失败", label);
        }
        println!("✅ 非法季度标签测试通过！");
    }
}
