// Shared kernel: concerns used by every bounded context.

pub mod errors; // Shared error types
pub mod infrastructure; // Database pool + migrations
pub mod utils; // Logging, validation

// Re-exports for convenience
pub use infrastructure::database::Database;
