//! 错误类型定义
//!
//! 按失败来源区分错误并映射到对应的 HTTP 状态码：
//! 上游不可达为 502，上游数据契约破坏为 500，调用方输入
//! 非法为 400，结果集为空为 404。错误响应体统一为
//! `{"error": "<message>"}`，供仪表盘宿主直接展示

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// BIS 数据管道错误
#[derive(Debug, thiserror::Error)]
pub enum BisError {
    /// 上游请求失败（超时、连接失败或非 2xx 状态）
    #[error("Error fetching BIS series: {message}")]
    Fetch {
        /// 上游返回的 HTTP 状态码（传输层失败时为 None）
        status: Option<u16>,
        message: String,
    },
    /// XML 文档无法解析（上游契约破坏）
    #[error("Error parsing BIS XML: {0}")]
    Parse(String),
    /// 期间标签不符合 YYYY-Qn 语法（上游契约破坏）
    #[error("Invalid period label: {0}")]
    DateParse(String),
    /// startdate 参数无法解析（调用方输入错误）
    #[error("Invalid startdate: {0}")]
    BadStartDate(String),
    /// 上游返回了空结果集
    #[error("No data returned from BIS.")]
    NoData,
    /// 图表渲染功能被配置关闭
    #[error("Chart rendering is disabled by configuration.")]
    ChartUnavailable,
}

impl ResponseError for BisError {
    fn status_code(&self) -> StatusCode {
        match self {
            BisError::Fetch { .. } => StatusCode::BAD_GATEWAY,
            BisError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BisError::DateParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BisError::BadStartDate(_) => StatusCode::BAD_REQUEST,
            BisError::NoData => StatusCode::NOT_FOUND,
            BisError::ChartUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = serde_json::json!({
            "error": self.to_string(),
        });
        // 上游失败时把上游状态码一并带给调用方
        if let BisError::Fetch { status: Some(status), .. } = self {
            body["upstream_status"] = serde_json::json!(status);
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

// ==================== 测试模块 ====================
