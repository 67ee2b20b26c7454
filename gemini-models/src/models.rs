//! Models API surface.

use std::sync::Arc;

use gemini_models_types::models::{ModelDescriptor, ModelListResponse};
use http::StatusCode;
use serde::de::Error as _;
use serde_json::Value;

use crate::client::ClientInner;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

/// 一次列表请求的结果：解码后的响应体与服务端返回的状态码。
///
/// 状态码只用于日志，不参与任何判断。
#[derive(Debug, Clone)]
pub struct ModelListing {
    pub status: StatusCode,
    pub response: ModelListResponse,
}

impl ModelListing {
    /// 按响应顺序逐个解码条目。遇到第一个无效条目时产出错误。
    pub fn descriptors(&self) -> impl Iterator<Item = Result<ModelDescriptor>> + '_ {
        self.response
            .models
            .iter()
            .enumerate()
            .map(|(index, entry)| descriptor_at(index, entry))
    }
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型。
    ///
    /// 不检查 HTTP 状态码：只要响应体是预期形状的 JSON，非 2xx 响应与 2xx 一样返回。
    ///
    /// # Errors
    /// 网络失败或响应体不是 JSON 对象时返回错误。
    pub async fn list(&self) -> Result<ModelListing> {
        let url = build_models_list_url(&self.inner)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "model listing returned a non-success status, decoding body anyway"
            );
        }
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        let response = decode_list_body(&body)?;
        tracing::debug!(entries = response.models.len(), "decoded model listing");
        Ok(ModelListing { status, response })
    }
}

fn build_models_list_url(inner: &ClientInner) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    let mut url = reqwest::Url::parse(&format!("{base}{version}/models")).map_err(|err| {
        Error::InvalidConfig {
            message: err.to_string(),
        }
    })?;
    url.query_pairs_mut()
        .append_pair("key", &inner.config.api_key);
    Ok(url.to_string())
}

pub(crate) fn decode_list_body(body: &str) -> Result<ModelListResponse> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(serde_json::Error::custom("expected a JSON object at the top level").into());
    }
    Ok(serde_json::from_value(value)?)
}

/// 将第 `index` 个原始条目解码为 [`ModelDescriptor`]。
///
/// # Errors
/// 条目是缺少 `name` 的对象时返回 [`Error::MissingField`]，其它形状错误返回
/// [`Error::Decode`]。
pub fn descriptor_at(index: usize, entry: &Value) -> Result<ModelDescriptor> {
    if let Some(object) = entry.as_object() {
        if !object.contains_key("name") {
            return Err(Error::MissingField {
                index,
                field: "name",
            });
        }
    }
    Ok(serde_json::from_value(entry.clone())?)
}
