mod disabled_model;
mod gemini_client;
mod generative_model_factory;

pub use disabled_model::DisabledGenerativeModel;
pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use generative_model_factory::GenerativeModelFactory;
