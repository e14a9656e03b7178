//! 提示词生成 - 业务能力层
//!
//! 纯函数：根据卡片快照判定题型并格式化出最终提示词，
//! 不触碰页面，不触碰剪贴板。

use crate::error::ExtractError;
use crate::models::{CardSnapshot, QuestionKind};

/// 根据快照生成提示词
///
/// 流程：定位回答控件标签 → 判定题型 → 按题型格式化。
/// 题型分发是对封闭枚举的穷举 match，新增题型时编译器会提醒补全。
pub fn build_prompt(snapshot: &CardSnapshot) -> Result<String, ExtractError> {
    let tag = snapshot
        .response_tag
        .as_deref()
        .ok_or(ExtractError::NoResponseElement)?;

    match QuestionKind::from_tag(tag) {
        QuestionKind::MultipleChoice => multiple_choice(snapshot),
        QuestionKind::FreeAnswer => free_answer(snapshot),
        QuestionKind::WordCloud => word_cloud(snapshot),
        QuestionKind::Unknown => Err(ExtractError::UnrecognizedKind {
            tag: tag.to_string(),
        }),
    }
}

/// 多选题：`<题目>\n\n<标识>) <文本>\n` 逐行列出全部选项
///
/// 标识与文本按下标配对，两列必须非空且等长
fn multiple_choice(snapshot: &CardSnapshot) -> Result<String, ExtractError> {
    if snapshot.texts.is_empty() || snapshot.texts.len() != snapshot.labels.len() {
        return Err(ExtractError::ResponseMismatch);
    }

    let mut prompt = format!("{}\n\n", snapshot.question);
    for (label, text) in snapshot.labels.iter().zip(snapshot.texts.iter()) {
        prompt.push_str(&format!("{}) {}\n", label, text));
    }
    Ok(prompt)
}

/// 自由作答题：按词数限制作答
fn free_answer(snapshot: &CardSnapshot) -> Result<String, ExtractError> {
    let limit = positive_limit(snapshot.max_length)
        .ok_or(ExtractError::InvalidWordLimit {
            raw: snapshot.max_length,
        })?;
    Ok(format!(
        "Answer the following in {} words or less:\n\n{}",
        limit, snapshot.question
    ))
}

/// 词云题：按字符数限制作答
fn word_cloud(snapshot: &CardSnapshot) -> Result<String, ExtractError> {
    let limit = positive_limit(snapshot.max_length)
        .ok_or(ExtractError::InvalidCharLimit {
            raw: snapshot.max_length,
        })?;
    Ok(format!(
        "Answer the following in {} characters or less:\n\n{}",
        limit, snapshot.question
    ))
}

/// 校验限制值为正数（输入框没有 maxlength 属性时浏览器给 -1）
fn positive_limit(raw: Option<i64>) -> Option<i64> {
    raw.filter(|v| *v > 0)
}
