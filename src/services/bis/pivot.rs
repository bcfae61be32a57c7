//! 数据透视与变化率变换
//!
//! 将观测记录重塑为日期 × 国家的矩阵，支持起始日期过滤和
//! 同比/环比变化率变换。矩阵每次请求构造一次，构造后只有
//! 变化率变换会派生出同形状的新矩阵

use chrono::NaiveDate;
use std::collections::HashMap;

use super::common::parse_quarter_label;
use crate::errors::BisError;
use crate::models::Observation;

/// 透视矩阵
///
/// 行按唯一日期升序排列，列按国家代码首次出现顺序排列，
/// 单元格为观测值或 None
#[derive(Debug, Clone, PartialEq)]
pub struct PivotMatrix {
    /// 日期轴（升序、去重）
    pub dates: Vec<NaiveDate>,
    /// 列名（国家代码，首次出现顺序）
    pub columns: Vec<String>,
    /// 单元格，按 [行][列] 索引
    pub values: Vec<Vec<Option<f64>>>,
}

impl PivotMatrix {
    /// 提取某一列的完整序列
    pub fn column_values(&self, col: usize) -> Vec<Option<f64>> {
        self.values.iter().map(|row| row[col]).collect()
    }

    /// 计算 n 期滞后变化率，派生同形状的新矩阵
    ///
    /// 前 periods 行因历史不足全部为 None；滞后单元格缺失或
    /// 为零时结果为 None
    pub fn pct_change(&self, periods: usize) -> PivotMatrix {
        let mut values = vec![vec![None; self.columns.len()]; self.dates.len()];
        for row in periods..self.dates.len() {
            for col in 0..self.columns.len() {
                if let (Some(current), Some(previous)) =
                    (self.values[row][col], self.values[row - periods][col])
                {
                    if previous != 0.0 {
                        values[row][col] = Some(current / previous - 1.0);
                    }
                }
            }
        }
        PivotMatrix {
            dates: self.dates.clone(),
            columns: self.columns.clone(),
            values,
        }
    }
}

/// 变化率模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeMode {
    /// 原始水平值
    Total,
    /// 同比（4 期滞后，季度数据）
    Yoy,
    /// 环比（1 期滞后）
    Qoq,
}

impl ChangeMode {
    /// 解析模式参数，未识别的取值回退为 Total
    pub fn from_param(param: &str) -> Self {
        match param {
            "yoy" => ChangeMode::Yoy,
            "qoq" => ChangeMode::Qoq,
            _ => ChangeMode::Total,
        }
    }
}

/// 将观测记录透视为矩阵
///
/// 1. 解析期间标签为可排序日期（缺失标签的记录跳过并记录日志，
///    非法标签使整个请求失败）
/// 2. 按起始日期过滤（含当天）
/// 3. 构造矩阵，重复 (日期, 国家) 时后出现者覆盖
///
/// 过滤后没有任何记录时返回 `NoData`
pub fn pivot_observations(
    observations: &[Observation],
    start_date: Option<NaiveDate>,
) -> Result<PivotMatrix, BisError> {
    let mut parsed: Vec<(NaiveDate, &str, Option<f64>)> = Vec::new();
    for obs in observations {
        let label = match obs.date.as_deref() {
            Some(l) => l,
            None => {
                log::warn!("跳过缺少期间标签的观测数据: country={}", obs.country);
                continue;
            }
        };
        let date = parse_quarter_label(label)?;
        if let Some(start) = start_date {
            if date < start {
                continue;
            }
        }
        parsed.push((date, obs.country.as_str(), obs.value));
    }

    if parsed.is_empty() {
        return Err(BisError::NoData);
    }

    let mut columns: Vec<String> = Vec::new();
    for (_, country, _) in &parsed {
        if !columns.iter().any(|c| c == country) {
            columns.push((*country).to_string());
        }
    }

    let mut dates: Vec<NaiveDate> = parsed.iter().map(|(date, _, _)| *date).collect();
    dates.sort();
    dates.dedup();

    let date_index: HashMap<NaiveDate, usize> =
        dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();
    let col_index: HashMap<&str, usize> =
        columns.iter().enumerate().map(|(i, c)| (c.as_str(), i)).collect();

    let mut values = vec![vec![None; columns.len()]; dates.len()];
    for (date, country, value) in &parsed {
        values[date_index[date]][col_index[country]] = *value;
    }

    Ok(PivotMatrix { dates, columns, values })
}

/// 应用变化率模式
///
/// Total 模式下矩阵和单位标签原样透传，yoy/qoq 模式下派生
/// 变化率矩阵并用固定描述覆盖单位标签
pub fn apply_change_mode(
    matrix: PivotMatrix,
    mode: ChangeMode,
    units: &str,
) -> (PivotMatrix, String) {
    match mode {
        ChangeMode::Total => (matrix, units.to_string()),
        ChangeMode::Yoy => (matrix.pct_change(4), "YoY % change".to_string()),
        ChangeMode::Qoq => (matrix.pct_change(1), "QoQ % change".to_string()),
    }
}

// ==================== 测试模块 ====================
