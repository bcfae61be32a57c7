//! 图表描述模型
//!
//! 定义可直接 JSON 序列化的图形描述结构，由仪表盘宿主的
//! 绘图引擎负责实际渲染。字段命名遵循 Plotly 图形 JSON 约定

use chrono::NaiveDate;
use serde::Serialize;

/// 完整图形描述：若干轨迹 + 布局
#[derive(Debug, Serialize)]
pub struct FigureSpec {
    /// 数据轨迹列表
    pub data: Vec<Trace>,
    /// 布局（主题、注释、坐标轴等）
    pub layout: ChartLayout,
}

/// 数据轨迹
///
/// 序列化时以 "type" 字段区分轨迹类型
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// 散点/折线轨迹
    Scatter(ScatterTrace),
    /// 柱状轨迹
    Bar(BarTrace),
    /// 小提琴分布轨迹
    Violin(ViolinTrace),
}

/// 坐标轴数据
///
/// 不同图表类型的 x/y 轴数据形态不同：日期轴、含空值序列、
/// 纯数值序列或分类标签
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AxisData {
    /// 日期轴（ISO 格式序列化）
    Dates(Vec<NaiveDate>),
    /// 含空值的数值序列
    Values(Vec<Option<f64>>),
    /// 纯数值序列
    Numbers(Vec<f64>),
    /// 分类标签
    Labels(Vec<String>),
}

/// 散点/折线轨迹
#[derive(Debug, Serialize)]
pub struct ScatterTrace {
    pub x: AxisData,
    pub y: AxisData,
    /// 绘制模式："lines" 或 "markers"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

/// 柱状轨迹
#[derive(Debug, Serialize)]
pub struct BarTrace {
    pub x: AxisData,
    pub y: AxisData,
    pub name: String,
    pub marker: MarkerStyle,
}

/// 小提琴分布轨迹
#[derive(Debug, Serialize)]
pub struct ViolinTrace {
    /// 非空观测值
    pub y: Vec<f64>,
    pub name: String,
    /// 是否叠加箱线
    #[serde(rename = "box")]
    pub box_style: VisibleFlag,
    /// 是否显示均值线
    pub meanline: VisibleFlag,
    pub line: LineColor,
    pub opacity: f64,
}

/// 可见性开关
#[derive(Debug, Serialize)]
pub struct VisibleFlag {
    pub visible: bool,
}

/// 仅含颜色的线条样式
#[derive(Debug, Serialize)]
pub struct LineColor {
    pub color: String,
}

/// 线条样式
#[derive(Debug, Serialize)]
pub struct LineStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// 标记点样式
#[derive(Debug, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// 图表布局
#[derive(Debug, Serialize)]
pub struct ChartLayout {
    pub title: LayoutTitle,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: FontStyle,
    pub template: String,
    pub margin: Margin,
    pub legend: LegendStyle,
    pub annotations: Vec<Annotation>,
    pub images: Vec<LayoutImage>,
    pub autosize: bool,
    pub height: u32,
    pub xaxis: AxisStyle,
    pub yaxis: AxisStyle,
}

/// 布局标题（标题文本通过注释绘制，这里仅保留定位）
#[derive(Debug, Serialize)]
pub struct LayoutTitle {
    pub text: String,
    pub y: f64,
    pub x: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub font: TitleFont,
}

/// 标题字号
#[derive(Debug, Serialize)]
pub struct TitleFont {
    pub size: u32,
}

/// 全局字体
#[derive(Debug, Serialize)]
pub struct FontStyle {
    pub family: String,
    pub color: String,
}

/// 页边距
#[derive(Debug, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

/// 图例样式（水平排布于图表左上方）
#[derive(Debug, Serialize)]
pub struct LegendStyle {
    pub orientation: String,
    pub yanchor: String,
    pub y: f64,
    pub xanchor: String,
    pub x: f64,
    pub font: LegendFont,
}

/// 图例字体
#[derive(Debug, Serialize)]
pub struct LegendFont {
    pub family: String,
    pub color: String,
}

/// 文本注释（标题和数据来源脚注）
#[derive(Debug, Serialize)]
pub struct Annotation {
    pub text: String,
    pub showarrow: bool,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    pub yanchor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xshift: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yshift: Option<i32>,
    pub align: String,
    pub font: AnnotationFont,
}

/// 注释字体
#[derive(Debug, Serialize)]
pub struct AnnotationFont {
    pub size: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// 布局图片（角标 Logo）
#[derive(Debug, Serialize)]
pub struct LayoutImage {
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub sizex: f64,
    pub sizey: f64,
    pub source: String,
    pub opacity: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub sizing: String,
    pub visible: bool,
    pub layer: String,
}

/// 坐标轴样式
#[derive(Debug, Serialize)]
pub struct AxisStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    pub showgrid: bool,
    pub showline: bool,
    pub linewidth: f64,
    pub linecolor: String,
    pub zeroline: bool,
    pub zerolinecolor: String,
    pub tickwidth: u32,
    pub tickcolor: String,
    pub ticks: String,
    pub tickfont: TickFont,
    /// 数值格式（变化率图表使用百分比格式 ",.2%"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
}

/// 坐标轴标题
#[derive(Debug, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

/// 刻度字体
#[derive(Debug, Serialize)]
pub struct TickFont {
    pub color: String,
}
