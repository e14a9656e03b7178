//! 卡片数据模型
//!
//! 一次性从页面读出的卡片快照，后续的分类和提示词生成
//! 全部基于这份快照完成，不再回读 DOM

use serde::Deserialize;

/// 卡片在页面中的编号（data-fpg-id 属性值）
pub type CardId = u64;

/// 卡片快照
///
/// 由 CardReader 一次 eval 采集，字段无条件全量采集：
/// - 多选题只会用到 labels / texts
/// - 自由作答 / 词云只会用到 max_length
#[derive(Debug, Clone, Deserialize)]
pub struct CardSnapshot {
    /// 题目文本（p.question 的 textContent）
    pub question: String,

    /// 回答控件的标签名（首个以 FLUX-AUDIENCE- 开头的直接子元素）
    /// 不存在时为 None
    #[serde(rename = "responseTag")]
    pub response_tag: Option<String>,

    /// 多选题的选项标识（A / B / C ...），按 DOM 顺序
    #[serde(default)]
    pub labels: Vec<String>,

    /// 多选题的选项文本，与 labels 按下标配对
    #[serde(default)]
    pub texts: Vec<String>,

    /// 输入框的 maxLength（无输入框时为 None，属性缺省时浏览器返回 -1）
    #[serde(rename = "maxLength")]
    pub max_length: Option<i64>,
}

/// 页面事件
///
/// next_event 的返回值：要么发现了新卡片，要么用户点了某张卡片的
/// Copy Prompt 按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageEvent {
    /// 新卡片插入（含同一批 mutation 中的多个匹配，逐个出队）
    Card { id: CardId },
    /// 用户点击了卡片上的 Copy Prompt 按钮
    Click { id: CardId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialize_full() {
        let json = serde_json::json!({
            "question": "Pick one",
            "responseTag": "FLUX-AUDIENCE-MULTIPLE-CHOICE",
            "labels": ["A", "B"],
            "texts": ["Yes", "No"],
            "maxLength": null,
        });
        let snapshot: CardSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(snapshot.question, "Pick one");
        assert_eq!(
            snapshot.response_tag.as_deref(),
            Some("FLUX-AUDIENCE-MULTIPLE-CHOICE")
        );
        assert_eq!(snapshot.labels, vec!["A", "B"]);
        assert_eq!(snapshot.texts, vec!["Yes", "No"]);
        assert!(snapshot.max_length.is_none());
    }

    #[test]
    fn test_snapshot_deserialize_without_widget() {
        // 没有回答控件的卡片：responseTag 为 null，其余字段为空
        let json = serde_json::json!({
            "question": "orphan",
            "responseTag": null,
            "labels": [],
            "texts": [],
            "maxLength": null,
        });
        let snapshot: CardSnapshot = serde_json::from_value(json).unwrap();
        assert!(snapshot.response_tag.is_none());
        assert!(snapshot.labels.is_empty());
    }

    #[test]
    fn test_page_event_deserialize() {
        let card: PageEvent =
            serde_json::from_value(serde_json::json!({ "kind": "card", "id": 3 })).unwrap();
        assert_eq!(card, PageEvent::Card { id: 3 });

        let click: PageEvent =
            serde_json::from_value(serde_json::json!({ "kind": "click", "id": 7 })).unwrap();
        assert_eq!(click, PageEvent::Click { id: 7 });
    }
}
