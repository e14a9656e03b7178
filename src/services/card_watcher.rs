//! 卡片监听服务 - 业务能力层
//!
//! 负责发现投票卡片：启动时安装一个常驻的页内 MutationObserver，
//! 把新插入的卡片和按钮点击统一推进队列，Rust 侧通过单次等待逐个取出。
//!
//! 与逐次拆装观察器的做法不同，整个页面生命周期内只存在这一个
//! 观察器；同一批 mutation 里出现的多张卡片全部入队，不会丢失。

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::infrastructure::JsExecutor;
use crate::models::{CardId, PageEvent};

/// 卡片选择器（宿主页面约定：每道题一个 mat-card-content）
pub const CARD_SELECTOR: &str = "mat-card-content";

/// 单次页内等待的时限（毫秒）
///
/// CDP 命令在 handler 侧有 30 秒的默认超时，挂起超过时限的
/// evaluate 会被判为 CdpError::Timeout。页内等待必须在此之前
/// 主动返回 idle 哨兵，由 Rust 侧重新发起等待。
const POLL_DEADLINE_MS: u64 = 10_000;

/// CDP 默认命令超时（毫秒），页内时限必须留出余量
const CDP_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// 页内队列轮询间隔（毫秒）
const POLL_INTERVAL_MS: u64 = 120;

/// 安装常驻观察器并给存量卡片打上编号
///
/// 幂等：重复执行不会安装第二个观察器，也不会给同一张卡片
/// 重复编号。返回本次新编号的卡片 id（文档顺序）。
const INSTALL_SCRIPT: &str = r#"
(() => {
    if (!window.__fpgState) {
        const state = {
            nextId: 1,
            pendingCards: [],
            pendingClicks: [],
            observer: null,
            tag: null,
        };
        state.tag = (el) => {
            if (el.dataset.fpgId) return null;
            el.dataset.fpgId = String(state.nextId++);
            return Number(el.dataset.fpgId);
        };
        const enqueue = (el) => {
            const id = state.tag(el);
            if (id !== null) state.pendingCards.push(id);
        };
        state.observer = new MutationObserver((mutations) => {
            for (const mutation of mutations) {
                for (const node of mutation.addedNodes) {
                    if (!(node instanceof Element)) continue;
                    if (node.matches('mat-card-content')) enqueue(node);
                    node.querySelectorAll('mat-card-content').forEach(enqueue);
                }
            }
        });
        state.observer.observe(document.body, { childList: true, subtree: true });
        window.__fpgState = state;
    }
    const existing = [];
    for (const el of document.querySelectorAll('mat-card-content')) {
        const id = window.__fpgState.tag(el);
        if (id !== null) existing.push(id);
    }
    return existing;
})()
"#;

/// 单次页内等待的结果
///
/// idle 不是业务事件，只表示这一轮等待到期，外层继续发起下一轮
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum PollOutcome {
    Card { id: CardId },
    Click { id: CardId },
    Idle,
}

/// 卡片监听服务
///
/// 职责：
/// - 安装页内观察器（整个运行期只装一次）
/// - 枚举存量卡片
/// - 逐个取出"新卡片 / 点击"事件
/// - 不注入按钮，不生成提示词
pub struct CardWatcher;

impl CardWatcher {
    /// 创建新的卡片监听服务
    pub fn new() -> Self {
        Self
    }

    /// 安装观察器，返回页面上已有卡片的编号（文档顺序）
    pub async fn install(&self, executor: &JsExecutor) -> Result<Vec<CardId>> {
        let existing: Vec<CardId> = executor.eval_as(INSTALL_SCRIPT).await?;
        debug!("观察器已安装，存量卡片: {:?}", existing);
        Ok(existing)
    }

    /// 等待下一个页面事件（新卡片插入或按钮点击）
    ///
    /// 对调用方没有超时：页内等待到期返回 idle 哨兵时在这里
    /// 静默续期，空闲多久都不会把错误抛给事件循环
    pub async fn next_event(&self, executor: &JsExecutor) -> Result<PageEvent> {
        loop {
            match executor.eval_as(Self::next_event_script()).await? {
                PollOutcome::Card { id } => return Ok(PageEvent::Card { id }),
                PollOutcome::Click { id } => return Ok(PageEvent::Click { id }),
                PollOutcome::Idle => {
                    trace!("页面空闲，续期等待");
                    continue;
                }
            }
        }
    }

    /// 生成单次等待脚本
    ///
    /// 点击优先于新卡片出队；两个队列都为空时在页内轮询挂起，
    /// 到期返回 idle 哨兵（必须赶在 CDP 命令超时之前返回）。
    fn next_event_script() -> String {
        format!(
            r#"
(async () => {{
    const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));
    const deadline = Date.now() + {deadline};
    while (Date.now() < deadline) {{
        const state = window.__fpgState;
        if (state) {{
            if (state.pendingClicks.length > 0) {{
                return {{ kind: 'click', id: state.pendingClicks.shift() }};
            }}
            if (state.pendingCards.length > 0) {{
                return {{ kind: 'card', id: state.pendingCards.shift() }};
            }}
        }}
        await sleep({interval});
    }}
    return {{ kind: 'idle' }};
}})()
"#,
            deadline = POLL_DEADLINE_MS,
            interval = POLL_INTERVAL_MS
        )
    }
}

impl Default for CardWatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_script_is_idempotent_and_scans_subtrees() {
        // 只装一次观察器
        assert!(INSTALL_SCRIPT.contains("if (!window.__fpgState)"));
        // 整棵插入的子树也要扫描，不只是直接匹配的节点
        assert!(INSTALL_SCRIPT.contains("node.matches"));
        assert!(INSTALL_SCRIPT.contains("querySelectorAll"));
        assert!(INSTALL_SCRIPT.contains(CARD_SELECTOR));
    }

    #[test]
    fn test_next_event_script_drains_clicks_first() {
        let script = CardWatcher::next_event_script();
        let clicks = script.find("pendingClicks").unwrap();
        let cards = script.find("pendingCards").unwrap();
        assert!(clicks < cards);
    }

    #[test]
    fn test_poll_deadline_stays_under_cdp_timeout() {
        // 页内等待必须在 CDP 命令超时之前返回，否则挂起的 evaluate
        // 会被判为 Timeout 错误、把事件循环打断
        assert!(POLL_DEADLINE_MS + POLL_INTERVAL_MS < CDP_REQUEST_TIMEOUT_MS);

        let script = CardWatcher::next_event_script();
        assert!(script.contains(&POLL_DEADLINE_MS.to_string()));
        assert!(script.contains("{ kind: 'idle' }"));
    }

    #[test]
    fn test_poll_outcome_decode() {
        let card: PollOutcome =
            serde_json::from_value(serde_json::json!({ "kind": "card", "id": 3 })).unwrap();
        assert!(matches!(card, PollOutcome::Card { id: 3 }));

        let idle: PollOutcome =
            serde_json::from_value(serde_json::json!({ "kind": "idle" })).unwrap();
        assert!(matches!(idle, PollOutcome::Idle));
    }
}
