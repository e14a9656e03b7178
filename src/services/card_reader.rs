//! 卡片读取服务 - 业务能力层
//!
//! 一次 eval 把提示词生成需要的全部内容读成 CardSnapshot，
//! 分类和格式化都在 Rust 侧基于快照完成。

use anyhow::Result;
use serde_json::Value as JsonValue;

use crate::error::ExtractError;
use crate::infrastructure::JsExecutor;
use crate::models::{CardId, CardSnapshot};

/// 卡片读取服务
///
/// 职责：
/// - 读取题目文本（p.question）
/// - 定位回答控件（首个 FLUX-AUDIENCE- 前缀的直接子元素）
/// - 无条件采集多选项标识/文本和输入框 maxLength
/// - 不做分类，不做格式化
pub struct CardReader;

impl CardReader {
    /// 创建新的卡片读取服务
    pub fn new() -> Self {
        Self
    }

    /// 读取指定卡片的快照
    pub async fn read(&self, executor: &JsExecutor, card_id: CardId) -> Result<CardSnapshot> {
        let raw: JsonValue = executor.eval(Self::snapshot_script(card_id)).await?;

        // 脚本层面的结构性失败通过 error 字段上报
        if let Some(code) = raw.get("error").and_then(|v| v.as_str()) {
            anyhow::bail!("读取卡片 #{} 失败: {}", card_id, code);
        }

        let snapshot: CardSnapshot =
            serde_json::from_value(raw).map_err(|e| ExtractError::SnapshotDecodeFailed {
                source: Box::new(e),
            })?;
        Ok(snapshot)
    }

    /// 生成快照采集脚本
    ///
    /// 选项标识与选项文本来自两条并列查询（排除提交按钮），
    /// 顺序即 DOM 顺序，按下标配对交给上层校验
    fn snapshot_script(card_id: CardId) -> String {
        format!(
            r#"
(() => {{
    const card = document.querySelector('mat-card-content[data-fpg-id="{id}"]');
    if (!card) return {{ error: 'card-not-found' }};
    const questionEl = card.querySelector('p.question');
    if (!questionEl) return {{ error: 'missing-question' }};

    const snapshot = {{
        question: questionEl.textContent,
        responseTag: null,
        labels: [],
        texts: [],
        maxLength: null,
    }};

    const widget = Array.from(card.children).find((c) => c.tagName.startsWith('FLUX-AUDIENCE-'));
    if (!widget) return snapshot;
    snapshot.responseTag = widget.tagName;

    snapshot.labels = Array.from(
        widget.querySelectorAll('form > button[type]:not([type="submit"]) div.button-content > div.label')
    ).map((el) => el.innerText);
    snapshot.texts = Array.from(
        widget.querySelectorAll('form > button[type]:not([type="submit"]) div.button-content > span')
    ).map((el) => el.innerText);

    const input = widget.querySelector('input');
    snapshot.maxLength = input ? input.maxLength : null;
    return snapshot;
}})()
"#,
            id = card_id
        )
    }
}

impl Default for CardReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RESPONSE_TAG_PREFIX;

    #[test]
    fn test_snapshot_script_queries_expected_structure() {
        let script = CardReader::snapshot_script(12);
        assert!(script.contains(r#"mat-card-content[data-fpg-id="12"]"#));
        assert!(script.contains("p.question"));
        assert!(script.contains(RESPONSE_TAG_PREFIX));
        // 提交按钮不算候选回答
        assert!(script.contains(r#":not([type="submit"])"#));
    }
}
