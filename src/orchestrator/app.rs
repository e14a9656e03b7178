//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：连接浏览器、定位投票页、创建 JsExecutor
//! 2. **启动动作**：按配置在后台标签页打开助手站点（写入即忘）
//! 3. **存量处理**：给页面上已有的卡片按文档顺序注入按钮
//! 4. **事件循环**：常驻消费"新卡片 / 按钮点击"事件
//!
//! ## 失败隔离
//!
//! 单张卡片的注入失败、单次点击的提取失败都只记日志后跳过，
//! 不会中断后续的发现与处理；只有浏览器层面的失败（页面关闭、
//! 连接断开）才会让事件循环退出。

use std::collections::HashMap;

use anyhow::Result;
use chromiumoxide::Browser;
use tracing::{error, info, warn};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::JsExecutor;
use crate::models::{CardId, PageEvent};
use crate::services::{ButtonInjector, CardWatcher};
use crate::utils::logging::log_startup;
use crate::workflow::{CardCtx, CardFlow};

/// 应用主结构
pub struct App {
    config: Config,
    _browser: Browser,
    executor: JsExecutor,
    watcher: CardWatcher,
    injector: ButtonInjector,
    flow: CardFlow,
    /// 卡片编号 → 发现顺序（仅用于日志显示）
    ordinals: HashMap<CardId, usize>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        // 连接浏览器并定位投票页
        let (browser, page) = browser::connect_to_browser_and_page(
            config.browser_debug_port,
            &config.target_url,
            &config.page_url_marker,
        )
        .await?;

        // 创建 JsExecutor（持有 page）
        let executor = JsExecutor::new(page);
        let flow = CardFlow::new(&config);

        Ok(Self {
            config,
            _browser: browser,
            executor,
            watcher: CardWatcher::new(),
            injector: ButtonInjector::new(),
            flow,
            ordinals: HashMap::new(),
        })
    }

    /// 运行应用主逻辑（事件循环不会自行退出）
    pub async fn run(&mut self) -> Result<()> {
        // 按配置在后台标签页打开助手站点，结果不影响主流程
        if self.config.open_chat_page {
            browser::open_chat_tab(&self._browser, &self.config.chat_url).await;
        }

        // 安装常驻观察器并处理存量卡片
        let existing = self.watcher.install(&self.executor).await?;
        let mut injected = 0usize;
        for card_id in existing {
            if self.inject_card(card_id).await {
                injected += 1;
            }
        }
        info!("✓ 已处理页面上现有的 {} 张卡片", injected);

        // 事件循环
        loop {
            match self.watcher.next_event(&self.executor).await? {
                PageEvent::Card { id } => {
                    if self.inject_card(id).await {
                        info!("✓ 已处理新插入的卡片 #{}", id);
                    }
                }
                PageEvent::Click { id } => {
                    self.handle_click(id).await;
                }
            }
        }
    }

    /// 给一张卡片注入按钮并登记发现顺序
    ///
    /// 失败只记日志（跳过这张卡片，继续监听后续卡片）
    async fn inject_card(&mut self, card_id: CardId) -> bool {
        let ordinal = self.ordinals.len() + 1;
        match self.injector.inject(&self.executor, card_id).await {
            Ok(()) => {
                self.ordinals.entry(card_id).or_insert(ordinal);
                true
            }
            Err(e) => {
                warn!("⚠️ 卡片 #{} 注入失败，跳过: {}", card_id, e);
                false
            }
        }
    }

    /// 处理一次按钮点击
    ///
    /// 提取失败大声记错误日志，用户重新点击即可重试
    async fn handle_click(&self, card_id: CardId) {
        let ordinal = self.ordinals.get(&card_id).copied().unwrap_or(0);
        let ctx = CardCtx::new(card_id, ordinal);
        if let Err(e) = self.flow.run(&self.executor, &ctx).await {
            error!("{} ❌ 提示词生成失败: {}", ctx, e);
        }
    }
}
