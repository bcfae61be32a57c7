//! 组件注册表服务
//!
//! 启动时静态构造仪表盘组件元数据表，通过应用状态注入
//! 路由层，之后只读。不使用运行期注册机制

use std::collections::BTreeMap;

use crate::models::{GridData, ParamOption, WidgetConfig, WidgetParam, WidgetRegistry};

fn option(value: &str, label: &str) -> ParamOption {
    ParamOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// 表格组件的国家筛选键选项
fn table_key_options() -> Vec<ParamOption> {
    vec![
        option("Q..N.A.M.USD.A", "All"),
        option("Q.AU.N.A.M.USD.A", "Australia"),
        option("Q.CA.N.A.M.USD.A", "Canada"),
        option("Q.CN.N.A.M.USD.A", "China"),
        option("Q.XM.N.A.M.USD.A", "EuroArea"),
        option("Q.FR.N.A.M.USD.A", "France"),
        option("Q.DE.N.A.M.USD.A", "Germany"),
        option("Q.IT.N.A.M.USD.A", "Italy"),
        option("Q.JP.N.A.M.USD.A", "Japan"),
        option("Q.ES.N.A.M.USD.A", "Spain"),
        option("Q.GB.N.A.M.USD.A", "United Kingdom"),
        option("Q.US.N.A.M.USD.A", "United States"),
    ]
}

/// 信贷数据表格组件
fn credit_table_widget() -> WidgetConfig {
    WidgetConfig {
        id: "bis_credit_table".to_string(),
        name: "BIS Credit Data Table".to_string(),
        description: "Tabular view of BIS credit data time series".to_string(),
        widget_type: "table".to_string(),
        endpoint: "bis_credit_table".to_string(),
        grid_data: GridData { w: 20, h: 13 },
        params: vec![
            WidgetParam {
                param_name: "resource_id".to_string(),
                param_type: "text".to_string(),
                default: "WS_TC".to_string(),
                description: "Resource ID".to_string(),
                options: Some(vec![option(
                    "WS_TC",
                    "Total credit to non-financial sector",
                )]),
            },
            WidgetParam {
                param_name: "key".to_string(),
                param_type: "text".to_string(),
                default: String::new(),
                description: "Key".to_string(),
                options: Some(table_key_options()),
            },
        ],
    }
}

/// 信贷数据图表组件
fn credit_chart_widget() -> WidgetConfig {
    WidgetConfig {
        id: "bis_credit_chart".to_string(),
        name: "BIS Chart".to_string(),
        description: "Plotly chart of BIS credit data for multiple countries".to_string(),
        widget_type: "chart".to_string(),
        endpoint: "bis_credit_chart".to_string(),
        grid_data: GridData { w: 20, h: 13 },
        params: vec![
            WidgetParam {
                param_name: "resource_id".to_string(),
                param_type: "text".to_string(),
                default: "WS_TC".to_string(),
                description: "Resource ID".to_string(),
                options: None,
            },
            WidgetParam {
                param_name: "key".to_string(),
                param_type: "text".to_string(),
                default: "Q.CN+XM+JP+US.N.A.M.USD.A".to_string(),
                description:
                    "Key (e.g., Q.US.N.A.M.XDC.U or Q.US+ES.N.A.M.XDC.U for multiple countries)"
                        .to_string(),
                options: None,
            },
            WidgetParam {
                param_name: "units".to_string(),
                param_type: "text".to_string(),
                default: "USD bn".to_string(),
                description: "Units label".to_string(),
                options: None,
            },
            WidgetParam {
                param_name: "startdate".to_string(),
                param_type: "date".to_string(),
                default: String::new(),
                description: "Start date (yyyy-mm-dd)".to_string(),
                options: None,
            },
            WidgetParam {
                param_name: "mode".to_string(),
                param_type: "text".to_string(),
                default: "total".to_string(),
                description: "Display mode".to_string(),
                options: Some(vec![
                    option("total", "Total Outstanding"),
                    option("yoy", "Year-on-Year Change"),
                    option("qoq", "Quarterly Change"),
                ]),
            },
            WidgetParam {
                param_name: "chart".to_string(),
                param_type: "text".to_string(),
                default: "line".to_string(),
                description: "Chart kind".to_string(),
                options: Some(vec![
                    option("line", "Line"),
                    option("bar", "Bar"),
                    option("regression", "Regression"),
                    option("distribution", "Distribution"),
                ]),
            },
        ],
    }
}

/// 构造默认组件注册表
pub fn default_widgets() -> WidgetRegistry {
    let mut registry = BTreeMap::new();
    for widget in [credit_table_widget(), credit_chart_widget()] {
        registry.insert(widget.id.clone(), widget);
    }
    registry
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试注册表包含全部组件
    #[test]
    fn test_registry_contains_widgets() {
        println!("\n========== 测试组件注册表 ==========");
        let registry = default_widgets();

        println!("  组件数量: {}", registry.len());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("bis_credit_table"));
        assert!(registry.contains_key("bis_credit_chart"));

        let chart = &registry["bis_credit_chart"];
        assert_eq!(chart.widget_type, "chart");
        assert_eq!(chart.grid_data.w, 20);
        assert_eq!(chart.grid_data.h, 13);
        println!("✅ 组件注册表测试通过！");
    }

    /// 测试组件元数据的 JSON 键名
    #[test]
    fn test_registry_json_field_names() {
        println!("\n========== 测试组件元数据 JSON 键名 ==========");
        let registry = default_widgets();
        let json = serde_json::to_value(&registry).unwrap();

        let table = &json["bis_credit_table"];
        assert_eq!(table["type"], "table");
        assert_eq!(table["gridData"]["w"], 20);
        assert_eq!(table["params"][0]["paramName"], "resource_id");
        assert_eq!(table["params"][1]["options"][0]["label"], "All");

        let chart = &json["bis_credit_chart"];
        assert_eq!(chart["params"][4]["options"][1]["value"], "yoy");
        println!("✅ 组件元数据 JSON 键名测试通过！");
    }
}
