mod analysis;
mod analyze_doc;
mod analyze_json;
mod error;
mod health;
mod upload;

pub use analyze_doc::analyze_audio_doc_handler;
pub use analyze_json::analyze_audio_json_handler;
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use upload::AUDIO_FIELD;
