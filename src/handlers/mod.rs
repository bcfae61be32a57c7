pub mod credit;
pub mod health;
pub mod widgets;

use actix_web::web;

/// 配置全部路由
///
/// 仪表盘宿主按固定路径访问，路由挂载在根路径下
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::config)
        .configure(credit::config)
        .configure(widgets::config);
}
