//! 组件元数据接口处理器

use actix_web::{web, HttpResponse, Result};

use crate::models::WidgetRegistry;

/// 获取组件元数据
///
/// GET /widgets.json
///
/// 返回组件 ID 到元数据的映射，内容在启动时构造，运行期只读
pub async fn get_widgets(registry: web::Data<WidgetRegistry>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(registry.get_ref()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/widgets.json", web::get().to(get_widgets));
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::widget_service::default_widgets;
    use actix_web::{test, App};

    /// 测试组件元数据端点
    #[actix_web::test]
    async fn test_widgets_endpoint() {
        println!("\n========== 测试 /widgets.json ==========");
        let registry = web::Data::new(default_widgets());
        let app =
            test::init_service(App::new().app_data(registry).configure(config)).await;

        let req = test::TestRequest::get().uri("/widgets.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.get("bis_credit_table").is_some());
        assert!(body.get("bis_credit_chart").is_some());
        assert_eq!(body["bis_credit_chart"]["endpoint"], "bis_credit_chart");
        println!("✅ /widgets.json 测试通过！");
    }
}
