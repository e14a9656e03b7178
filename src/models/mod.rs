pub mod card;
pub mod question_kind;

pub use card::{CardId, CardSnapshot, PageEvent};
pub use question_kind::{QuestionKind, RESPONSE_TAG_PREFIX};
