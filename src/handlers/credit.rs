//! BIS 信贷数据接口处理器
//!
//! 提供仪表盘组件消费的数据端点
//!
//! ## API 列表
//! - GET /bis_credit_table - 信贷数据表格
//! - GET /bis_credit_chart - 信贷数据图表
//!
//! 两个端点共享同一条 获取 -> 解析 管道，仅下游投影不同

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::errors::BisError;
use crate::models::{CreditChartQuery, CreditTableQuery};
use crate::services::bis::{
    apply_change_mode, fetch_credit_xml, parse_credit_xml, pivot_observations,
    project_table_rows, ChangeMode, ChartState, Theme, CHART_TITLE, DEFAULT_AGENCY,
    DEFAULT_CHART_KEY, DEFAULT_CONTEXT, DEFAULT_RESOURCE_ID, DEFAULT_TABLE_KEY,
    DEFAULT_VERSION,
};

/// 获取信贷数据表格
///
/// GET /bis_credit_table?resource_id=WS_TC&key=Q.US.N.A.M.USD.A
///
/// 返回 {Date, Country, Value} 行数组，结果集为空时返回 404
pub async fn bis_credit_table(
    query: web::Query<CreditTableQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, BisError> {
    let resource_id = query.resource_id.as_deref().unwrap_or(DEFAULT_RESOURCE_ID);
    let key = query.key.as_deref().unwrap_or(DEFAULT_TABLE_KEY);

    let xml = fetch_credit_xml(
        &config.bis,
        DEFAULT_CONTEXT,
        DEFAULT_AGENCY,
        resource_id,
        DEFAULT_VERSION,
        key,
    )
    .await?;
    let observations = parse_credit_xml(&xml)?;

    let rows = project_table_rows(&observations);
    if rows.is_empty() {
        return Err(BisError::NoData);
    }
    Ok(HttpResponse::Ok().json(rows))
}

/// 获取信贷数据图表
///
/// GET /bis_credit_chart?key=Q.CN+XM+JP+US.N.A.M.USD.A&mode=yoy&theme=dark
///
/// 返回图形描述 JSON；无数据 404，startdate 非法 400，
/// 渲染功能关闭 500
pub async fn bis_credit_chart(
    query: web::Query<CreditChartQuery>,
    config: web::Data<AppConfig>,
    chart_state: web::Data<ChartState>,
) -> Result<HttpResponse, BisError> {
    let renderer = chart_state
        .renderer
        .as_ref()
        .ok_or(BisError::ChartUnavailable)?;

    let resource_id = query.resource_id.as_deref().unwrap_or(DEFAULT_RESOURCE_ID);
    let key = query.key.as_deref().unwrap_or(DEFAULT_CHART_KEY);
    let units = query.units.as_deref().unwrap_or("USD bn");
    let theme = Theme::from_param(query.theme.as_deref().unwrap_or("light"));
    let mode = ChangeMode::from_param(query.mode.as_deref().unwrap_or("total"));
    let kind_param = query.chart.as_deref().unwrap_or("line");

    // 起始日期为调用方输入，解析失败是 400 而不是 500
    let start_date = match query.startdate.as_deref().filter(|s| !s.is_empty()) {
        Some(s) => Some(
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| BisError::BadStartDate(format!("{}: {}", s, e)))?,
        ),
        None => None,
    };

    let xml = fetch_credit_xml(
        &config.bis,
        DEFAULT_CONTEXT,
        DEFAULT_AGENCY,
        resource_id,
        DEFAULT_VERSION,
        key,
    )
    .await?;
    let observations = parse_credit_xml(&xml)?;
    if observations.is_empty() {
        return Err(BisError::NoData);
    }

    let matrix = pivot_observations(&observations, start_date)?;
    let (matrix, units) = apply_change_mode(matrix, mode, units);
    let figure = renderer.render(&matrix, CHART_TITLE, &units, theme, kind_param);
    Ok(HttpResponse::Ok().json(figure))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/bis_credit_table", web::get().to(bis_credit_table))
        .route("/bis_credit_chart", web::get().to(bis_credit_chart));
}

// ==================== 测试模块 ====================
