//! 题型枚举
//!
//! 把原来按标签名字符串分发的逻辑收敛为封闭枚举，
//! 分发处用穷举 match，编译期保证不漏分支

/// flux.qa 回答控件的标签名前缀
pub const RESPONSE_TAG_PREFIX: &str = "FLUX-AUDIENCE-";

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// 多选题（按钮组）
    MultipleChoice,
    /// 自由作答（多词文本框，按词数限制）
    FreeAnswer,
    /// 词云（单词文本框，按字符数限制）
    WordCloud,
    /// 未识别的控件类型
    Unknown,
}

impl QuestionKind {
    /// 根据回答控件的标签名判定题型
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "FLUX-AUDIENCE-MULTIPLE-CHOICE" => QuestionKind::MultipleChoice,
            "FLUX-AUDIENCE-FREE-ANSWER" => QuestionKind::FreeAnswer,
            "FLUX-AUDIENCE-WORD-CLOUD" => QuestionKind::WordCloud,
            _ => QuestionKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known_kinds() {
        assert_eq!(
            QuestionKind::from_tag("FLUX-AUDIENCE-MULTIPLE-CHOICE"),
            QuestionKind::MultipleChoice
        );
        assert_eq!(
            QuestionKind::from_tag("FLUX-AUDIENCE-FREE-ANSWER"),
            QuestionKind::FreeAnswer
        );
        assert_eq!(
            QuestionKind::from_tag("FLUX-AUDIENCE-WORD-CLOUD"),
            QuestionKind::WordCloud
        );
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(
            QuestionKind::from_tag("FLUX-AUDIENCE-RANKING"),
            QuestionKind::Unknown
        );
        assert_eq!(QuestionKind::from_tag("DIV"), QuestionKind::Unknown);
        assert_eq!(QuestionKind::from_tag(""), QuestionKind::Unknown);
    }
}
