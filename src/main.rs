//! BIS 数据后端服务
//!
//! 将 BIS 信贷统计数据封装为 OpenBB Workspace 仪表盘组件
//! 数据来源：BIS SDMX REST API（stats.bis.org）

mod config;     // 配置加载
mod errors;     // 错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::bis::ChartState;
use crate::services::widget_service::default_widgets;

/// 应用程序入口
///
/// 启动 HTTP 服务器，监听地址来自配置（默认 0.0.0.0:8800）
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_config = AppConfig::load();

    // 初始化日志系统，默认日志级别来自配置
    env_logger::init_from_env(Env::default().default_filter_or(app_config.log.level.clone()));

    // 共享状态：配置、组件注册表和图表渲染器，启动后只读
    let config_data = web::Data::new(app_config.clone());
    let widget_registry = web::Data::new(default_widgets());
    let chart_state = web::Data::new(ChartState::from_config(&app_config.chart));

    log::info!("启动 BIS 数据后端服务, 监听地址: {}", app_config.bind_addr());
    if chart_state.renderer.is_none() {
        log::warn!("图表渲染功能已被配置关闭");
    }

    // 创建并启动 HTTP 服务器
    let workers = app_config.server.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(config_data.clone())
            .app_data(widget_registry.clone())
            .app_data(chart_state.clone())
            .configure(handlers::config)  // 配置路由
    });
    if workers > 0 {
        server = server.workers(workers);
    }
    server.bind(app_config.bind_addr())?.run().await
}
