//! BIS 数据服务
//!
//! 提供 BIS 信贷数据的获取和处理逻辑，单一共享管道：
//! 获取 -> 解析 -> {表格投影 | 透视变换 -> 图表渲染}
//!
//! ## 数据来源
//! - BIS SDMX REST API（stats.bis.org）：非金融部门信贷统计

mod chart;
mod common;
mod fetch;
mod parse;
mod pivot;

// 重新导出公共类型和函数（这些是公共 API，供 handlers 使用）
pub use chart::{ChartState, Theme};
pub use common::{
    CHART_TITLE, DEFAULT_AGENCY, DEFAULT_CHART_KEY, DEFAULT_CONTEXT, DEFAULT_RESOURCE_ID,
    DEFAULT_TABLE_KEY, DEFAULT_VERSION,
};
pub use fetch::fetch_credit_xml;
pub use parse::{parse_credit_xml, project_table_rows};
pub use pivot::{apply_change_mode, pivot_observations, ChangeMode};

// 管道中间类型（公共 API，handlers 经由上层函数间接使用）
pub use chart::ChartRenderer;
pub use common::parse_quarter_label;
pub use pivot::PivotMatrix;
