pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, GeminiSettings, ServerSettings, Settings};
pub use router::{ANALYZE_DOC_PATH, ANALYZE_JSON_PATH, create_router};
pub use state::AppState;
