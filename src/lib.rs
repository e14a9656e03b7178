//! # Flux Prompt Gen
//!
//! 通过 DevTools 协议驱动 flux.qa 投票页的提示词生成工具：
//! 发现投票卡片、注入 "Copy Prompt" 按钮，点击后把题目和作答
//! 约束合成为纯文本提示词写入系统剪贴板，供粘贴到外部助手使用。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `JsExecutor` - 唯一的 page owner，提供 eval() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单张卡片
//! - `CardWatcher` - 常驻观察器，发现卡片 / 点击事件
//! - `ButtonInjector` - 注入 Copy Prompt 按钮
//! - `CardReader` - 读取卡片快照
//! - `prompt_builder` - 题型判定与提示词格式化（纯函数）
//! - `ClipboardWriter` - 写系统剪贴板
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次点击"的完整处理流程
//! - `CardCtx` - 上下文封装（card_id + 发现顺序）
//! - `CardFlow` - 流程编排（快照 → 提示词 → 剪贴板）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 事件循环，管理资源和失败隔离

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::{connect_to_browser_and_page, open_chat_tab};
pub use config::Config;
pub use error::{ClipboardError, ExtractError, InjectError};
pub use infrastructure::JsExecutor;
pub use models::{CardId, CardSnapshot, PageEvent, QuestionKind};
pub use orchestrator::App;
pub use services::build_prompt;
pub use workflow::{CardCtx, CardFlow};
