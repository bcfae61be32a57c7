//! BIS 数据获取
//!
//! 向 BIS SDMX REST API 发起单次 GET 请求并返回原始 XML 文本。
//! 交互式请求路径，失败立即返回，不做重试和退避

use reqwest::Client;
use std::time::Duration;

use crate::config::BisApiConfig;
use crate::errors::BisError;

/// 获取 BIS 信贷数据原始 XML
///
/// URL 模板：{base}/{context}/{agency}/{resource_id}/{version}/{key}
///
/// 任何传输失败（超时、DNS、非 2xx 状态）都收敛为 `FetchError`，
/// 不向调用方泄露原始传输异常
pub async fn fetch_credit_xml(
    config: &BisApiConfig,
    context: &str,
    agency_id: &str,
    resource_id: &str,
    version: &str,
    key: &str,
) -> Result<String, BisError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .build()
        .map_err(|e| BisError::Fetch { status: None, message: e.to_string() })?;

    let url = format!(
        "{}/{}/{}/{}/{}/{}",
        config.base_url, context, agency_id, resource_id, version, key
    );
    println!("📡 请求 BIS 数据 URL: {}", url);

    let response = client
        .get(&url)
        .header("Accept", "application/xml")
        .send()
        .await
        .map_err(|e| BisError::Fetch { status: None, message: e.to_string() })?;

    let status = response.status();
    if !status.is_success() {
        return Err(BisError::Fetch {
            status: Some(status.as_u16()),
            message: format!("upstream returned {}", status),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| BisError::Fetch { status: Some(status.as_u16()), message: e.to_string() })?;

    let preview: String = text.chars().take(300).collect();
    println!("📥 原始响应数据: {}", preview);

    Ok(text)
}
