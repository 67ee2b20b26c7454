//! Plain-text rendering of the model listing.

use std::io::Write;

use gemini_models_types::models::ModelDescriptor;

use crate::client::Client;
use crate::error::Result;
use crate::models::ModelListing;

pub const BANNER: &str = "✅ AVAILABLE GEMINI MODELS:";
pub const SEPARATOR_WIDTH: usize = 40;

/// 拉取模型列表并以纯文本写出。
#[derive(Clone)]
pub struct ModelLister {
    client: Client,
}

impl ModelLister {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// 请求一次模型列表并写入 `out`。
    ///
    /// 请求或解码失败时不写出任何内容；条目无效时，之前的条目已经写出。
    ///
    /// # Errors
    /// 网络失败、响应体不是 JSON、条目缺少 `name` 或写出失败时返回错误。
    pub async fn run(&self, out: impl Write) -> Result<()> {
        let listing = self.client.models().list().await?;
        Self::render(&listing, out)
    }

    /// 写出横幅以及每个条目的块。
    ///
    /// # Errors
    /// 条目无效或写出失败时返回错误。
    pub fn render(listing: &ModelListing, mut out: impl Write) -> Result<()> {
        write_banner(&mut out)?;
        for descriptor in listing.descriptors() {
            write_descriptor(&mut out, &descriptor?)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// # Errors
/// 写出失败时返回错误。
pub fn write_banner(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{BANNER}\n")?;
    Ok(())
}

/// # Errors
/// 写出失败时返回错误。
pub fn write_descriptor(out: &mut impl Write, descriptor: &ModelDescriptor) -> Result<()> {
    writeln!(out, "🔹 Name       : {}", descriptor.name)?;
    writeln!(out, "   Methods    : {}", descriptor.joined_methods())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}
