pub mod error;
pub mod fallback;
pub mod interface;
pub mod openai;
pub mod resolver;

pub use error::TranslateError;
pub use fallback::fake_translate;
pub use interface::{TranslateRequest, TranslateResponse, TranslationProvider};
pub use resolver::{Resolution, TranslationResolver};
