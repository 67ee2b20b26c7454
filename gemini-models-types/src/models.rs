use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 模型目录中的一项。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// 资源名，例如 `models/gemini-1.5-pro`。
    pub name: String,
    /// 模型支持的生成方法，例如 `generateContent`。
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelDescriptor {
    /// 以 `", "` 连接的生成方法列表。
    #[must_use]
    pub fn joined_methods(&self) -> String {
        self.supported_generation_methods.join(", ")
    }
}

/// `ListModels` 响应体。
///
/// 条目保持为原始 JSON，在打印时逐个转换为 [`ModelDescriptor`]。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelListResponse {
    #[serde(default)]
    pub models: Vec<Value>,
}
