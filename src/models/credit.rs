//! BIS 信贷数据模型
//!
//! 定义 BIS 统计 API 返回的观测数据结构和查询参数

use serde::{Deserialize, Serialize};

/// 单条观测数据
///
/// 对应 SDMX XML 中的一个 `<Obs>` 节点，按文档顺序产出
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// 期间标签（如 "2020-Q1"），节点缺少 TIME_PERIOD 属性时为 None
    pub date: Option<String>,
    /// 国家代码（Series 缺少 BORROWERS_CTY 属性时为 "Unknown"）
    pub country: String,
    /// 观测值，属性缺失、为空或非数字时为 None
    pub value: Option<f64>,
}

/// 表格展示行
///
/// 字段名与仪表盘表格组件约定的 JSON 键一致
#[derive(Debug, Serialize)]
pub struct CreditRow {
    /// 期间标签
    #[serde(rename = "Date")]
    pub date: String,
    /// 国家代码
    #[serde(rename = "Country")]
    pub country: String,
    /// 观测值（可为 null）
    #[serde(rename = "Value")]
    pub value: Option<f64>,
}

/// 表格接口查询参数
#[derive(Debug, Deserialize)]
pub struct CreditTableQuery {
    /// 资源 ID（默认 WS_TC）
    pub resource_id: Option<String>,
    /// SDMX 筛选键（如 Q.US.N.A.M.USD.A）
    pub key: Option<String>,
}

/// 图表接口查询参数
#[derive(Debug, Deserialize)]
pub struct CreditChartQuery {
    /// 资源 ID（默认 WS_TC）
    pub resource_id: Option<String>,
    /// SDMX 筛选键，+ 号分隔多个国家
    pub key: Option<String>,
    /// 数值单位标签（默认 "USD bn"）
    pub units: Option<String>,
    /// 主题："light" 或 "dark"
    pub theme: Option<String>,
    /// 起始日期（yyyy-mm-dd，含当天）
    pub startdate: Option<String>,
    /// 变化率模式："total"、"yoy" 或 "qoq"
    pub mode: Option<String>,
    /// 图表类型："line"、"bar"、"regression" 或 "distribution"
    pub chart: Option<String>,
}
