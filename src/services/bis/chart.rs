//! 图表渲染服务
//!
//! 将透视矩阵渲染为图形描述。调色板按列数选取固定档位，
//! 列序号到颜色的映射确定且稳定：相同输入重复渲染得到
//! 相同的颜色分配
//!
//! ## 支持的图表类型
//! - line: 每列一条折线
//! - bar: 每列一组柱
//! - regression: 前两列散点 + 最小二乘拟合线 + 最近 12 点高亮
//! - distribution: 每列一个小提琴分布 + 最新值标记

use crate::config::ChartConfig;
use crate::models::{
    Annotation, AnnotationFont, AxisData, AxisStyle, AxisTitle, BarTrace, ChartLayout,
    FigureSpec, FontStyle, LayoutImage, LayoutTitle, LegendFont, LegendStyle, LineColor,
    LineStyle, Margin, MarkerStyle, ScatterTrace, TickFont, TitleFont, Trace, ViolinTrace,
    VisibleFlag,
};

use super::pivot::PivotMatrix;

// ==================== 调色板档位 ====================

/// 单列
const PALETTE_ONE: [&str; 1] = ["#f1c40f"];
/// 两列
const PALETTE_TWO: [&str; 2] = ["#f1c40f", "#2ecc71"];
/// 三列
const PALETTE_THREE: [&str; 5] = ["#f1c40f", "#2ecc71", "#9b59b6", "#e74c3c", "#bababa"];
/// 四列
const PALETTE_FOUR: [&str; 6] = ["#f1c40f", "#2ecc71", "#9b59b6", "#e74c3c", "#bababa", "#0f3cf1"];
/// 五列
const PALETTE_FIVE: [&str; 7] = [
    "#f1c40f", "#2ecc71", "#9b59b6", "#e74c3c", "#bababa", "#0f3cf1", "#cc2e89",
];
/// 六列及以上
const PALETTE_FULL: [&str; 13] = [
    "#f1c40f", "#2ecc71", "#9b59b6", "#e74c3c", "#bababa", "#0f3cf1", "#cc2e89", "#b69b59",
    "#5974b6", "#3cd7e7", "#7d2eff", "#adf10f", "#abecc7",
];

/// 按列数选取调色板档位
///
/// 各档位共享相同前缀，同一列序号在任何档位下颜色一致；
/// 超出档位长度时取模循环
pub fn palette_for(column_count: usize) -> &'static [&'static str] {
    match column_count {
        1 => &PALETTE_ONE,
        2 => &PALETTE_TWO,
        3 => &PALETTE_THREE,
        4 => &PALETTE_FOUR,
        5 => &PALETTE_FIVE,
        _ => &PALETTE_FULL,
    }
}

// ==================== 主题 ====================

/// 显示主题
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// 解析主题参数，未识别的取值回退为 Light
    pub fn from_param(param: &str) -> Self {
        if param == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn colors(&self) -> ThemeColors {
        match self {
            Theme::Light => ThemeColors {
                text: "#0D1018",
                line: "black",
                zeroline: "#ededed",
                template: "plotly_white",
                paper: "rgba(250,250,250)",
            },
            Theme::Dark => ThemeColors {
                text: "#FFFFFF",
                line: "white",
                zeroline: "#333333",
                template: "plotly_dark",
                paper: "rgba(30, 49, 66,1)",
            },
        }
    }
}

/// 主题配色：文字、轴线、零线、模板和画布背景
struct ThemeColors {
    text: &'static str,
    line: &'static str,
    zeroline: &'static str,
    template: &'static str,
    paper: &'static str,
}

// ==================== 图表类型 ====================

/// 图表类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Line,
    Bar,
    Regression,
    Distribution,
}

impl ChartKind {
    /// 解析图表类型参数，未识别的取值回退为 Line
    pub fn from_param(param: &str) -> Self {
        match param.to_lowercase().as_str() {
            "bar" | "bar_pct" => ChartKind::Bar,
            "regression" => ChartKind::Regression,
            "distribution" => ChartKind::Distribution,
            _ => ChartKind::Line,
        }
    }
}

// ==================== 渲染器 ====================

/// 图表渲染能力状态
///
/// 渲染器在启动时按配置构造一次：配置关闭时为 None，
/// 图表端点据此返回明确的错误而不是静默空响应
pub struct ChartState {
    pub renderer: Option<ChartRenderer>,
}

impl ChartState {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            renderer: config.enabled.then(|| ChartRenderer::new(config)),
        }
    }
}

/// 图表渲染器
pub struct ChartRenderer {
    /// 数据来源脚注文本
    source_label: String,
    /// 角标 Logo 图片地址
    logo_url: String,
}

impl ChartRenderer {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            source_label: config.source_label.clone(),
            logo_url: config.logo_url.clone(),
        }
    }

    /// 渲染图形描述
    ///
    /// 图表类型名称包含 "pct" 时 y 轴使用百分比刻度格式
    pub fn render(
        &self,
        matrix: &PivotMatrix,
        title: &str,
        units: &str,
        theme: Theme,
        kind_param: &str,
    ) -> FigureSpec {
        let kind = ChartKind::from_param(kind_param);
        let data = match kind {
            ChartKind::Line => line_traces(matrix),
            ChartKind::Bar => bar_traces(matrix),
            ChartKind::Regression => regression_traces(matrix),
            ChartKind::Distribution => distribution_traces(matrix),
        };

        // 回归图的 x 轴标注首列列名，其余图表用日期/分类轴
        let xaxis_title = if kind == ChartKind::Regression && matrix.columns.len() >= 2 {
            Some(matrix.columns[0].clone())
        } else {
            None
        };
        let percent_axis = kind_param.to_lowercase().contains("pct");

        FigureSpec {
            data,
            layout: self.build_layout(title, units, theme, percent_axis, xaxis_title),
        }
    }

    fn build_layout(
        &self,
        title: &str,
        units: &str,
        theme: Theme,
        percent_axis: bool,
        xaxis_title: Option<String>,
    ) -> ChartLayout {
        let colors = theme.colors();
        ChartLayout {
            title: LayoutTitle {
                text: "<b><b>".to_string(),
                y: 0.95,
                x: 0.075,
                xanchor: "left".to_string(),
                yanchor: "top".to_string(),
                font: TitleFont { size: 20 },
            },
            paper_bgcolor: colors.paper.to_string(),
            plot_bgcolor: "rgba(0,0,0,0)".to_string(),
            font: FontStyle {
                family: "Verdana".to_string(),
                color: colors.text.to_string(),
            },
            template: colors.template.to_string(),
            margin: Margin { l: 50, r: 50, t: 70, b: 70 },
            legend: LegendStyle {
                orientation: "h".to_string(),
                yanchor: "bottom".to_string(),
                y: 1.0,
                xanchor: "left".to_string(),
                x: 0.0,
                font: LegendFont {
                    family: "Verdana".to_string(),
                    color: colors.text.to_string(),
                },
            },
            annotations: vec![
                // 数据来源脚注
                Annotation {
                    text: self.source_label.clone(),
                    showarrow: false,
                    x: 0.0,
                    y: -0.22,
                    xref: "paper".to_string(),
                    yref: "paper".to_string(),
                    xanchor: Some("left".to_string()),
                    yanchor: "bottom".to_string(),
                    xshift: Some(-1),
                    yshift: Some(-5),
                    align: "left".to_string(),
                    font: AnnotationFont {
                        size: 10,
                        color: colors.text.to_string(),
                        family: Some("Verdana".to_string()),
                    },
                },
                // 粗体标题
                Annotation {
                    text: format!("<b>{}<b>", title),
                    showarrow: false,
                    x: 0.0,
                    y: 1.25,
                    xref: "paper".to_string(),
                    yref: "paper".to_string(),
                    xanchor: None,
                    yanchor: "top".to_string(),
                    xshift: None,
                    yshift: None,
                    align: "left".to_string(),
                    font: AnnotationFont {
                        size: 20,
                        color: colors.text.to_string(),
                        family: None,
                    },
                },
            ],
            images: vec![LayoutImage {
                xref: "paper".to_string(),
                yref: "paper".to_string(),
                x: 0.9,
                y: -0.2,
                sizex: 0.2,
                sizey: 0.2,
                source: self.logo_url.clone(),
                opacity: 1.0,
                xanchor: "center".to_string(),
                yanchor: "middle".to_string(),
                sizing: "contain".to_string(),
                visible: true,
                layer: "below".to_string(),
            }],
            autosize: true,
            height: 500,
            xaxis: axis_style(&colors, xaxis_title, None),
            yaxis: axis_style(
                &colors,
                Some(units.to_string()),
                percent_axis.then(|| ",.2%".to_string()),
            ),
        }
    }
}

fn axis_style(
    colors: &ThemeColors,
    title: Option<String>,
    tickformat: Option<String>,
) -> AxisStyle {
    AxisStyle {
        title: title.map(|text| AxisTitle { text }),
        showgrid: false,
        showline: true,
        linewidth: 1.2,
        linecolor: colors.line.to_string(),
        zeroline: true,
        zerolinecolor: colors.zeroline.to_string(),
        tickwidth: 1,
        tickcolor: colors.line.to_string(),
        ticks: "inside".to_string(),
        tickfont: TickFont { color: colors.text.to_string() },
        tickformat,
    }
}

/// 每列一条折线
fn line_traces(matrix: &PivotMatrix) -> Vec<Trace> {
    let colors = palette_for(matrix.columns.len());
    matrix
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Trace::Scatter(ScatterTrace {
                x: AxisData::Dates(matrix.dates.clone()),
                y: AxisData::Values(matrix.column_values(i)),
                mode: Some("lines".to_string()),
                name: name.clone(),
                line: Some(LineStyle {
                    color: colors[i % colors.len()].to_string(),
                    width: Some(3.0),
                }),
                marker: None,
                showlegend: None,
            })
        })
        .collect()
}

/// 每列一组柱
fn bar_traces(matrix: &PivotMatrix) -> Vec<Trace> {
    let colors = palette_for(matrix.columns.len());
    matrix
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Trace::Bar(BarTrace {
                x: AxisData::Dates(matrix.dates.clone()),
                y: AxisData::Values(matrix.column_values(i)),
                name: name.clone(),
                marker: MarkerStyle {
                    color: colors[i % colors.len()].to_string(),
                    size: None,
                    opacity: None,
                    symbol: None,
                },
            })
        })
        .collect()
}

/// 前两列散点 + 最小二乘拟合线 + 最近 12 点高亮
///
/// 任一列为空值的行在配对时丢弃；列数不足两列时不产出轨迹
fn regression_traces(matrix: &PivotMatrix) -> Vec<Trace> {
    let mut traces = Vec::new();
    if matrix.columns.len() < 2 {
        return traces;
    }

    let pairs: Vec<(f64, f64)> = matrix
        .values
        .iter()
        .filter_map(|row| match (row[0], row[1]) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();
    let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();

    // 全量散点
    traces.push(Trace::Scatter(ScatterTrace {
        x: AxisData::Numbers(xs.clone()),
        y: AxisData::Numbers(ys.clone()),
        mode: Some("markers".to_string()),
        name: format!("{} vs {} (All)", matrix.columns[0], matrix.columns[1]),
        line: None,
        marker: Some(MarkerStyle {
            color: "#3b7484".to_string(),
            size: Some(6),
            opacity: Some(0.5),
            symbol: None,
        }),
        showlegend: None,
    }));

    // 拟合线
    if let Some((slope, intercept)) = least_squares_fit(&xs, &ys) {
        let fitted: Vec<f64> = xs.iter().map(|x| slope * x + intercept).collect();
        traces.push(Trace::Scatter(ScatterTrace {
            x: AxisData::Numbers(xs.clone()),
            y: AxisData::Numbers(fitted),
            mode: Some("lines".to_string()),
            name: "Regression".to_string(),
            line: Some(LineStyle { color: "#ec772a".to_string(), width: Some(2.0) }),
            marker: None,
            showlegend: None,
        }));
    }

    // 最近 12 点高亮
    let start = pairs.len().saturating_sub(12);
    traces.push(Trace::Scatter(ScatterTrace {
        x: AxisData::Numbers(xs[start..].to_vec()),
        y: AxisData::Numbers(ys[start..].to_vec()),
        mode: Some("markers".to_string()),
        name: "Latest 12".to_string(),
        line: None,
        marker: Some(MarkerStyle {
            color: "red".to_string(),
            size: Some(10),
            opacity: None,
            symbol: Some("diamond".to_string()),
        }),
        showlegend: Some(true),
    }));

    traces
}

/// 最小二乘拟合，返回 (斜率, 截距)
///
/// 点数不足两个或 x 无波动时返回 None
fn least_squares_fit(xs: &[f64], ys: &[f64]) -> Option<(f64, f64)> {
    if xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// 每列一个小提琴分布 + 最新非空值标记
fn distribution_traces(matrix: &PivotMatrix) -> Vec<Trace> {
    let colors = palette_for(matrix.columns.len());
    let mut traces = Vec::new();
    for (i, name) in matrix.columns.iter().enumerate() {
        let y: Vec<f64> = matrix.column_values(i).into_iter().flatten().collect();
        let latest = y.last().copied();

        traces.push(Trace::Violin(ViolinTrace {
            y,
            name: name.clone(),
            box_style: VisibleFlag { visible: true },
            meanline: VisibleFlag { visible: true },
            line: LineColor { color: colors[i % colors.len()].to_string() },
            opacity: 0.7,
        }));

        if let Some(latest) = latest {
            traces.push(Trace::Scatter(ScatterTrace {
                x: AxisData::Labels(vec![name.clone()]),
                y: AxisData::Numbers(vec![latest]),
                mode: Some("markers".to_string()),
                name: "Latest".to_string(),
                line: None,
                marker: Some(MarkerStyle {
                    color: "red".to_string(),
                    size: Some(14),
                    opacity: None,
                    symbol: Some("diamond".to_string()),
                }),
                // 图例只保留第一个最新值条目
                showlegend: Some(i == 0),
            }));
        }
    }
    traces
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Observation;
    use crate::services::bis::pivot::pivot_observations;

    fn obs(date: &str, country: &str, value: Option<f64>) -> Observation {
        Observation {
            date: Some(date.to_string()),
            country: country.to_string(),
            value,
        }
    }

    fn three_column_matrix() -> PivotMatrix {
        let observations = vec![
            obs("2020-Q1", "US", Some(1.0)),
            obs("2020-Q1", "JP", Some(2.0)),
            obs("2020-Q1", "DE", Some(3.0)),
            obs("2020-Q2", "US", Some(4.0)),
            obs("2020-Q2", "JP", Some(5.0)),
            obs("2020-Q2", "DE", Some(6.0)),
        ];
        pivot_observations(&observations, None).unwrap()
    }

    fn renderer() -> ChartRenderer {
        ChartRenderer::new(&ChartConfig::default())
    }

    /// 测试三列矩阵的颜色分配重复调用保持稳定
    #[test]
    fn test_palette_stable_across_calls() {
        println!("\n========== 测试调色板稳定性 ==========");
        let matrix = three_column_matrix();
        let renderer = renderer();

        for round in 0..3 {
            let figure = renderer.render(&matrix, "BIS Data", "USD bn", Theme::Light, "line");
            let json = serde_json::to_value(&figure).unwrap();
            println!("  第 {} 轮第 0 列颜色: {}", round + 1, json["data"][0]["line"]["color"]);
            assert_eq!(json["data"][0]["line"]["color"], "#f1c40f");
            assert_eq!(json["data"][1]["line"]["color"], "#2ecc71");
            assert_eq!(json["data"][2]["line"]["color"], "#9b59b6");
        }
        println!("✅ 调色板稳定性测试通过！");
    }

    /// 测试调色板档位共享前缀
    #[test]
    fn test_palette_tiers_share_prefix() {
        println!("\n========== 测试调色板档位前缀 ==========");
        for n in 1..=13 {
            let palette = palette_for(n);
            println!("  {} 列 -> {} 色", n, palette.len());
            assert_eq!(palette[0], "#f1c40f");
            if palette.len() > 1 {
                assert_eq!(palette[1], "#2ecc71");
            }
        }
        println!("✅ 调色板档位前缀测试通过！");
    }

    /// 测试折线图每列一条轨迹
    #[test]
    fn test_line_figure_one_trace_per_column() {
        println!("\n========== 测试折线图轨迹 ==========");
        let matrix = three_column_matrix();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "line");
        let json = serde_json::to_value(&figure).unwrap();

        let data = json["data"].as_array().unwrap();
        println!("  轨迹数量: {}", data.len());
        assert_eq!(data.len(), 3);
        for trace in data {
            assert_eq!(trace["type"], "scatter");
            assert_eq!(trace["mode"], "lines");
            assert_eq!(trace["line"]["width"], 3.0);
        }
        assert_eq!(data[0]["name"], "US");
        assert_eq!(data[0]["x"][0], "2020-01-01");
        println!("✅ 折线图轨迹测试通过！");
    }

    /// 测试柱状图轨迹类型和颜色
    #[test]
    fn test_bar_figure() {
        println!("\n========== 测试柱状图轨迹 ==========");
        let matrix = three_column_matrix();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "bar");
        let json = serde_json::to_value(&figure).unwrap();

        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["type"], "bar");
        assert_eq!(data[0]["marker"]["color"], "#f1c40f");
        println!("✅ 柱状图轨迹测试通过！");
    }

    /// 测试回归图丢弃空值配对并产出三条轨迹
    #[test]
    fn test_regression_drops_null_pairs() {
        println!("\n========== 测试回归图 ==========");
        let observations = vec![
            obs("2020-Q1", "US", Some(1.0)),
            obs("2020-Q1", "JP", Some(2.0)),
            obs("2020-Q2", "US", Some(2.0)),
            obs("2020-Q2", "JP", None),
            obs("2020-Q3", "US", Some(3.0)),
            obs("2020-Q3", "JP", Some(6.0)),
        ];
        let matrix = pivot_observations(&observations, None).unwrap();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "regression");
        let json = serde_json::to_value(&figure).unwrap();

        let data = json["data"].as_array().unwrap();
        println!("  轨迹数量: {}", data.len());
        // 全量散点 + 拟合线 + 最近 12 点
        assert_eq!(data.len(), 3);
        // 2020-Q2 的 JP 为空，配对后剩两个点
        assert_eq!(data[0]["x"].as_array().unwrap().len(), 2);
        assert_eq!(data[1]["name"], "Regression");
        assert_eq!(data[2]["name"], "Latest 12");
        assert_eq!(data[2]["marker"]["symbol"], "diamond");
        // x 轴标注首列列名，y 轴保持单位标签
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "US");
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], "USD bn");
        println!("✅ 回归图测试通过！");
    }

    /// 测试回归图列数不足时不产出轨迹
    #[test]
    fn test_regression_needs_two_columns() {
        println!("\n========== 测试回归图列数不足 ==========");
        let observations = vec![obs("2020-Q1", "US", Some(1.0))];
        let matrix = pivot_observations(&observations, None).unwrap();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "regression");

        assert!(figure.data.is_empty());
        println!("✅ 回归图列数不足测试通过！");
    }

    /// 测试分布图的小提琴轨迹和最新值标记
    #[test]
    fn test_distribution_latest_marker() {
        println!("\n========== 测试分布图 ==========");
        let observations = vec![
            obs("2020-Q1", "US", Some(1.0)),
            obs("2020-Q2", "US", Some(2.0)),
            obs("2020-Q3", "US", None),
            obs("2020-Q1", "JP", Some(5.0)),
            obs("2020-Q2", "JP", Some(7.0)),
        ];
        let matrix = pivot_observations(&observations, None).unwrap();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "distribution");
        let json = serde_json::to_value(&figure).unwrap();

        let data = json["data"].as_array().unwrap();
        // 每列一个小提琴 + 一个最新值标记
        assert_eq!(data.len(), 4);
        assert_eq!(data[0]["type"], "violin");
        assert_eq!(data[0]["box"]["visible"], true);
        assert_eq!(data[0]["meanline"]["visible"], true);
        // US 列空值剔除后最新值为 2.0
        assert_eq!(data[1]["name"], "Latest");
        assert_eq!(data[1]["y"][0], 2.0);
        assert_eq!(data[1]["showlegend"], true);
        // 第二列的最新值标记不再出现在图例中
        assert_eq!(data[3]["showlegend"], false);
        println!("✅ 分布图测试通过！");
    }

    /// 测试含 pct 的图表类型启用百分比刻度
    #[test]
    fn test_percent_tickformat() {
        println!("\n========== 测试百分比刻度格式 ==========");
        let matrix = three_column_matrix();
        let renderer = renderer();

        let figure = renderer.render(&matrix, "BIS Data", "USD bn", Theme::Light, "bar_pct");
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["layout"]["yaxis"]["tickformat"], ",.2%");

        let figure = renderer.render(&matrix, "BIS Data", "USD bn", Theme::Light, "line");
        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["layout"]["yaxis"].get("tickformat").is_none());
        println!("✅ 百分比刻度格式测试通过！");
    }

    /// 测试明暗主题配色
    #[test]
    fn test_theme_colors() {
        println!("\n========== 测试主题配色 ==========");
        let matrix = three_column_matrix();
        let renderer = renderer();

        let light = renderer.render(&matrix, "BIS Data", "USD bn", Theme::Light, "line");
        let json = serde_json::to_value(&light).unwrap();
        assert_eq!(json["layout"]["template"], "plotly_white");
        assert_eq!(json["layout"]["font"]["color"], "#0D1018");
        assert_eq!(json["layout"]["paper_bgcolor"], "rgba(250,250,250)");

        let dark = renderer.render(&matrix, "BIS Data", "USD bn", Theme::Dark, "line");
        let json = serde_json::to_value(&dark).unwrap();
        assert_eq!(json["layout"]["template"], "plotly_dark");
        assert_eq!(json["layout"]["font"]["color"], "#FFFFFF");
        assert_eq!(json["layout"]["xaxis"]["linecolor"], "white");
        assert_eq!(json["layout"]["xaxis"]["zerolinecolor"], "#333333");
        println!("✅ 主题配色测试通过！");
    }

    /// 测试标题注释和数据来源脚注
    #[test]
    fn test_title_and_source_annotations() {
        println!("\n========== 测试标题和脚注 ==========");
        let matrix = three_column_matrix();
        let figure = renderer().render(&matrix, "BIS Data", "USD bn", Theme::Light, "line");
        let json = serde_json::to_value(&figure).unwrap();

        let annotations = json["layout"]["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 2);
        assert_eq!(annotations[0]["text"], "Source: BIS, HedgeAnalytics");
        assert_eq!(annotations[1]["text"], "<b>BIS Data<b>");
        assert_eq!(json["layout"]["height"], 500);
        println!("✅ 标题和脚注测试通过！");
    }

    /// 测试主题和图表类型参数的宽松解析
    #[test]
    fn test_param_fallbacks() {
        println!("\n========== 测试参数宽松解析 ==========");
        assert_eq!(Theme::from_param("dark"), Theme::Dark);
        assert_eq!(Theme::from_param("light"), Theme::Light);
        assert_eq!(Theme::from_param("neon"), Theme::Light);

        assert_eq!(ChartKind::from_param("bar"), ChartKind::Bar);
        assert_eq!(ChartKind::from_param("Bar_PCT"), ChartKind::Bar);
        assert_eq!(ChartKind::from_param("regression"), ChartKind::Regression);
        assert_eq!(ChartKind::from_param("distribution"), ChartKind::Distribution);
        assert_eq!(ChartKind::from_param("pie"), ChartKind::Line);
        println!("✅ 参数宽松解析测试通过！");
    }

    /// 测试渲染能力开关
    #[test]
    fn test_chart_state_capability_flag() {
        println!("\n========== 测试渲染能力开关 ==========");
        let mut config = ChartConfig::default();
        assert!(ChartState::from_config(&config).renderer.is_some());

        config.enabled = false;
        assert!(ChartState::from_config(&config).renderer.is_none());
        println!("✅ 渲染能力开关测试通过！");
    }
}
