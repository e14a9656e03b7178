//! 提示词复制流程 - 流程层
//!
//! 核心职责：定义"一次按钮点击"的完整处理流程
//!
//! 流程顺序：
//! 1. 读取卡片快照
//! 2. 判定题型并生成提示词
//! 3. 写入系统剪贴板
//! 4. 回显日志

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::infrastructure::JsExecutor;
use crate::services::{build_prompt, CardReader, ClipboardWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::card_ctx::CardCtx;

/// 提示词复制流程
///
/// - 编排"点击 → 剪贴板"的完整链路
/// - 不持有任何页面资源
/// - 只依赖业务能力（services）
pub struct CardFlow {
    card_reader: CardReader,
    clipboard: ClipboardWriter,
    verbose_logging: bool,
}

impl CardFlow {
    /// 创建新的提示词复制流程
    pub fn new(config: &Config) -> Self {
        Self {
            card_reader: CardReader::new(),
            clipboard: ClipboardWriter::new(),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理一次按钮点击，返回已复制的提示词
    pub async fn run(&self, executor: &JsExecutor, ctx: &CardCtx) -> Result<String> {
        let snapshot = self.card_reader.read(executor, ctx.card_id).await?;
        let prompt = build_prompt(&snapshot)?;

        self.clipboard.write(&prompt)?;

        info!("{} ✓ 提示词已复制到剪贴板", ctx);
        if self.verbose_logging {
            info!("{} 提示词内容:\n{}", ctx, prompt);
        } else {
            info!("{} 提示词预览: {}", ctx, truncate_text(&prompt, 60));
        }

        Ok(prompt)
    }
}
