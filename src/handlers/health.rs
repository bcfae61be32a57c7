//! 存活探测接口处理器

use actix_web::{web, HttpResponse, Result};

/// 存活探测
///
/// GET /
pub async fn root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "BIS Data Backend for OpenBB Workspace"
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
}

// ==================== 测试模块 ====================
