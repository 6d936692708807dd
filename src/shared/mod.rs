// Shared kernel used by every module

pub mod application; // Shared application layer patterns (queries, pagination)
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and input validation

// Re-exports for convenience
pub use config::SearchHintsConfig;
pub use errors::{AppError, AppResult};
