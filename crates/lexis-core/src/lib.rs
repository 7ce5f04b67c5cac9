pub mod aggregator;
pub mod error;
pub mod language;
pub mod merge;
pub mod preprocess;

pub use aggregator::Aggregator;
pub use error::InputError;
pub use language::{LanguageInfo, detect_direction, language_info};
