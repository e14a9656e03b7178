//! 领域错误类型
//!
//! 每个能力层服务抛自己的具名错误，跨层传播交给 anyhow；
//! 浏览器 / CDP 层的失败由 chromiumoxide 的错误类型直接承载。

use std::fmt;

/// 提示词提取错误
///
/// 错误措辞沿用 flux.qa 页面的英文语境，便于对照排查
#[derive(Debug)]
pub enum ExtractError {
    /// 卡片里找不到回答控件
    NoResponseElement,
    /// 回答控件的标签名无法识别
    UnrecognizedKind { tag: String },
    /// 多选题的选项标识与选项文本数量不一致（或均为空）
    ResponseMismatch,
    /// 自由作答题的词数限制缺失或非正数
    InvalidWordLimit { raw: Option<i64> },
    /// 词云题的字符数限制缺失或非正数
    InvalidCharLimit { raw: Option<i64> },
    /// 卡片快照 JSON 无法解码
    SnapshotDecodeFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NoResponseElement => {
                write!(f, "unable to extract response element")
            }
            ExtractError::UnrecognizedKind { tag } => {
                write!(f, "unknown response element type '{}'", tag)
            }
            ExtractError::ResponseMismatch => {
                write!(f, "could not extract possible responses")
            }
            ExtractError::InvalidWordLimit { raw } => {
                write!(f, "failed to extract word limit (raw: {:?})", raw)
            }
            ExtractError::InvalidCharLimit { raw } => {
                write!(f, "failed to extract character limit (raw: {:?})", raw)
            }
            ExtractError::SnapshotDecodeFailed { source } => {
                write!(f, "failed to decode card snapshot: {}", source)
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::SnapshotDecodeFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 按钮注入错误
///
/// 把对宿主页面 DOM 结构的隐式假设显式化为具名前置条件
#[derive(Debug)]
pub enum InjectError {
    /// 卡片已经不在页面上
    CardNotFound { card_id: u64 },
    /// 卡片没有前一个兄弟元素（标题栏缺失）
    MissingHeader { card_id: u64 },
    /// 标题栏没有任何子元素，找不到插入锚点
    EmptyHeader { card_id: u64 },
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::CardNotFound { card_id } => {
                write!(f, "卡片 #{} 不存在或已被移除", card_id)
            }
            InjectError::MissingHeader { card_id } => {
                write!(f, "卡片 #{} 缺少标题栏兄弟元素", card_id)
            }
            InjectError::EmptyHeader { card_id } => {
                write!(f, "卡片 #{} 的标题栏没有子元素", card_id)
            }
        }
    }
}

impl std::error::Error for InjectError {}

/// 剪贴板错误
#[derive(Debug)]
pub enum ClipboardError {
    /// 打开系统剪贴板失败
    OpenFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入剪贴板失败
    WriteFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::OpenFailed { source } => {
                write!(f, "打开系统剪贴板失败: {}", source)
            }
            ClipboardError::WriteFailed { source } => {
                write!(f, "写入剪贴板失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClipboardError::OpenFailed { source } | ClipboardError::WriteFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}
