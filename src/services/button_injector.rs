//! 按钮注入服务 - 业务能力层
//!
//! 在卡片的标题栏里插入 "Copy Prompt" 按钮和间隔元素。
//! 宿主页面的结构约定（标题栏是卡片的前一个兄弟元素、标题栏
//! 至少有一个子元素）在脚本里逐项显式校验，违反时返回具名错误。

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use crate::error::InjectError;
use crate::infrastructure::JsExecutor;
use crate::models::CardId;

/// 注入脚本的结构化返回值
#[derive(Debug, Deserialize)]
struct InjectOutcome {
    #[serde(default)]
    ok: bool,
    /// 卡片此前已经注入过（重复发现时的幂等路径）
    #[serde(default)]
    already: bool,
    error: Option<String>,
}

/// 按钮注入服务
///
/// 职责：
/// - 校验注入前置条件（卡片在、标题栏在、锚点在）
/// - 插入按钮 + 间隔元素
/// - 把按钮点击接到页内点击队列
/// - 不关心提取流程
pub struct ButtonInjector;

impl ButtonInjector {
    /// 创建新的按钮注入服务
    pub fn new() -> Self {
        Self
    }

    /// 给指定卡片注入 Copy Prompt 按钮
    ///
    /// 对同一张卡片重复调用是无害的幂等操作
    pub async fn inject(&self, executor: &JsExecutor, card_id: CardId) -> Result<()> {
        let outcome: InjectOutcome = executor.eval_as(Self::inject_script(card_id)).await?;

        if let Some(code) = outcome.error {
            return Err(Self::map_error(&code, card_id).into());
        }
        if !outcome.ok {
            anyhow::bail!("注入脚本返回了意料之外的结果 (卡片 #{})", card_id);
        }
        if outcome.already {
            debug!("卡片 #{} 已注入过按钮，跳过", card_id);
        }
        Ok(())
    }

    /// 把脚本返回的错误码映射为具名注入错误
    fn map_error(code: &str, card_id: CardId) -> InjectError {
        match code {
            "missing-header" => InjectError::MissingHeader { card_id },
            "empty-header" => InjectError::EmptyHeader { card_id },
            _ => InjectError::CardNotFound { card_id },
        }
    }

    /// 生成注入脚本
    ///
    /// 按钮样式与图标沿用 flux.qa 页面原生的卡片工具栏风格
    fn inject_script(card_id: CardId) -> String {
        format!(
            r#"
(() => {{
    const card = document.querySelector('mat-card-content[data-fpg-id="{id}"]');
    if (!card) return {{ error: 'card-not-found' }};
    if (card.dataset.fpgInjected) return {{ ok: true, already: true }};
    const header = card.previousElementSibling;
    if (!header) return {{ error: 'missing-header' }};
    const anchor = header.lastElementChild;
    if (!anchor) return {{ error: 'empty-header' }};

    const button = document.createElement('button');
    button.style.cssText = 'display: flex; align-items: center;';
    const icon = document.createElement('img');
    icon.src = 'https://www.google.com/s2/favicons?sz=16&domain=chat.openai.com';
    const label = document.createElement('span');
    label.textContent = 'Copy Prompt';
    button.append(icon, document.createTextNode('\u00A0'), label);
    button.addEventListener('click', () => {{
        window.__fpgState.pendingClicks.push(Number(card.dataset.fpgId));
    }});

    const spacer = document.createElement('div');
    spacer.className = 'spacer';
    header.insertBefore(button, anchor);
    header.insertBefore(spacer, anchor);
    card.dataset.fpgInjected = '1';
    return {{ ok: true }};
}})()
"#,
            id = card_id
        )
    }
}

impl Default for ButtonInjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_script_targets_card_and_validates_preconditions() {
        let script = ButtonInjector::inject_script(7);
        assert!(script.contains(r#"mat-card-content[data-fpg-id="7"]"#));
        assert!(script.contains("missing-header"));
        assert!(script.contains("empty-header"));
        assert!(script.contains("Copy Prompt"));
    }

    #[test]
    fn test_map_error_codes() {
        assert!(matches!(
            ButtonInjector::map_error("missing-header", 1),
            InjectError::MissingHeader { card_id: 1 }
        ));
        assert!(matches!(
            ButtonInjector::map_error("empty-header", 2),
            InjectError::EmptyHeader { card_id: 2 }
        ));
        assert!(matches!(
            ButtonInjector::map_error("card-not-found", 3),
            InjectError::CardNotFound { card_id: 3 }
        ));
    }

    #[test]
    fn test_outcome_deserialize() {
        let ok: InjectOutcome = serde_json::from_value(serde_json::json!({ "ok": true })).unwrap();
        assert!(ok.ok && !ok.already && ok.error.is_none());

        let err: InjectOutcome =
            serde_json::from_value(serde_json::json!({ "error": "missing-header" })).unwrap();
        assert_eq!(err.error.as_deref(), Some("missing-header"));
    }
}
