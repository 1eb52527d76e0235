pub mod config;
pub mod error;
pub mod genai;

pub use config::GenAiConfig;
pub use error::GenAiError;
pub use genai::GenAiClient;
