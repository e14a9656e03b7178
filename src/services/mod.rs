pub mod button_injector;
pub mod card_reader;
pub mod card_watcher;
pub mod clipboard;
pub mod prompt_builder;

pub use button_injector::ButtonInjector;
pub use card_reader::CardReader;
pub use card_watcher::{CardWatcher, CARD_SELECTOR};
pub use clipboard::ClipboardWriter;
pub use prompt_builder::build_prompt;
