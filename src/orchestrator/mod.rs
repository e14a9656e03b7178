//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (事件循环：发现卡片 / 响应点击)
//!     ↓
//! workflow::CardFlow (处理单次点击：快照 → 提示词 → 剪贴板)
//!     ↓
//! services (能力层：watch / inject / read / build / clipboard)
//!     ↓
//! infrastructure (基础设施：JsExecutor)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有 Browser
//! 2. **失败隔离**：单张卡片 / 单次点击的失败不终止事件循环
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod app;

pub use app::App;
