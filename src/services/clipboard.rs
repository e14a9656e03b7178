//! 剪贴板写入服务 - 业务能力层
//!
//! 只负责"把提示词写进系统剪贴板"这一件事，写入即忘。

use anyhow::Result;

use crate::error::ClipboardError;

/// 剪贴板写入服务
///
/// arboard 的 Clipboard 句柄按平台可能持有系统资源，
/// 每次写入临时打开、用完即放，不长期持有
pub struct ClipboardWriter;

impl ClipboardWriter {
    /// 创建新的剪贴板写入服务
    pub fn new() -> Self {
        Self
    }

    /// 把文本原样写入系统剪贴板
    pub fn write(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::OpenFailed {
            source: Box::new(e),
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::WriteFailed {
                source: Box::new(e),
            })?;
        Ok(())
    }
}

impl Default for ClipboardWriter {
    fn default() -> Self {
        Self::new()
    }
}
