//! 组件元数据模型
//!
//! 定义仪表盘宿主 `/widgets.json` 约定的组件描述结构，
//! 启动时静态构造，之后只读

use serde::Serialize;
use std::collections::BTreeMap;

/// 组件注册表：组件 ID -> 组件配置
///
/// BTreeMap 保证 widgets.json 输出顺序稳定
pub type WidgetRegistry = BTreeMap<String, WidgetConfig>;

/// 单个组件配置
#[derive(Debug, Clone, Serialize)]
pub struct WidgetConfig {
    /// 组件 ID（与端点同名）
    pub id: String,
    /// 组件名称
    pub name: String,
    /// 组件描述
    pub description: String,
    /// 组件类型："table" 或 "chart"
    #[serde(rename = "type")]
    pub widget_type: String,
    /// 数据端点路径（不含前导斜杠）
    pub endpoint: String,
    /// 栅格尺寸
    #[serde(rename = "gridData")]
    pub grid_data: GridData,
    /// 参数定义列表
    pub params: Vec<WidgetParam>,
}

/// 组件栅格尺寸
#[derive(Debug, Clone, Serialize)]
pub struct GridData {
    pub w: u32,
    pub h: u32,
}

/// 组件参数定义
#[derive(Debug, Clone, Serialize)]
pub struct WidgetParam {
    /// 参数名（与端点查询参数同名）
    #[serde(rename = "paramName")]
    pub param_name: String,
    /// 参数输入类型："text" 或 "date"
    #[serde(rename = "type")]
    pub param_type: String,
    /// 默认值
    pub default: String,
    /// 参数说明
    pub description: String,
    /// 可选项列表（下拉选择）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ParamOption>>,
}

/// 参数可选项
#[derive(Debug, Clone, Serialize)]
pub struct ParamOption {
    pub value: String,
    pub label: String,
}
