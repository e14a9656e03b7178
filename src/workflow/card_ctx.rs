//! 卡片处理上下文
//!
//! 封装"我正在处理第几张卡片"这一信息，仅用于日志显示

use std::fmt::Display;

use crate::models::CardId;

/// 卡片处理上下文
#[derive(Debug, Clone, Copy)]
pub struct CardCtx {
    /// 卡片在页面中的编号
    pub card_id: CardId,

    /// 发现顺序（从 1 开始，仅用于日志显示）
    pub ordinal: usize,
}

impl CardCtx {
    /// 创建新的卡片上下文
    pub fn new(card_id: CardId, ordinal: usize) -> Self {
        Self { card_id, ordinal }
    }
}

impl Display for CardCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[卡片 #{} 第{}张]", self.card_id, self.ordinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_card_and_ordinal() {
        let ctx = CardCtx::new(5, 2);
        assert_eq!(ctx.to_string(), "[卡片 #5 第2张]");
    }
}
