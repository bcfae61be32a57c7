//! BIS XML 观测数据解析
//!
//! 将 SDMX 风格的 XML 载荷（`<Series BORROWERS_CTY="...">` 包含
//! `<Obs TIME_PERIOD="..." OBS_VALUE="...">`）转换为扁平观测记录，
//! 以及面向表格组件的行投影

use crate::errors::BisError;
use crate::models::{CreditRow, Observation};

/// 解析 BIS XML 文本为观测记录序列
///
/// 在整个文档范围内查找 `<Series>` 元素，每个 Series 的直接
/// `<Obs>` 子节点产出一条记录，输出保持文档顺序，不去重不排序。
///
/// 单条记录的容错规则：
/// - Series 缺少 BORROWERS_CTY 属性时国家代码记为 "Unknown"
/// - OBS_VALUE 缺失、为空或非数字时观测值为 None，不报错
///
/// 文档本身无法解析时返回 `Parse` 错误
pub fn parse_credit_xml(xml_text: &str) -> Result<Vec<Observation>, BisError> {
    let doc = roxmltree::Document::parse(xml_text)
        .map_err(|e| BisError::Parse(e.to_string()))?;

    let mut observations = Vec::new();
    for series in doc.descendants().filter(|n| n.has_tag_name("Series")) {
        let country = series.attribute("BORROWERS_CTY").unwrap_or("Unknown");
        for obs in series.children().filter(|n| n.has_tag_name("Obs")) {
            observations.push(Observation {
                date: obs.attribute("TIME_PERIOD").map(str::to_string),
                country: country.to_string(),
                value: obs
                    .attribute("OBS_VALUE")
                    .filter(|v| !v.is_empty())
                    .and_then(|v| v.parse::<f64>().ok()),
            });
        }
    }

    println!("📊 解析到 {} 条观测数据", observations.len());
    Ok(observations)
}

/// 将观测记录投影为表格展示行
///
/// 纯字段改名。缺少期间标签的记录跳过并记录日志，
/// 上游数据稀疏时部分结果优于整体失败
pub fn project_table_rows(observations: &[Observation]) -> Vec<CreditRow> {
    let mut rows = Vec::with_capacity(observations.len());
    for obs in observations {
        let date = match &obs.date {
            Some(d) => d.clone(),
            None => {
                log::warn!("跳过缺少期间标签的观测数据: country={}", obs.country);
                continue;
            }
        };
        rows.push(CreditRow {
            date,
            country: obs.country.clone(),
            value: obs.value,
        });
    }
    rows
}

// ==================== 测试模块 ====================
