// Public modules
pub mod config;
pub mod error;
pub mod finalize;
pub mod flags;
pub mod manifest;
pub mod pipeline;
pub mod readme;
pub mod sanitize;
pub mod scaffold;

// Public for CLI and test access
pub mod defaults;

// Re-export common types for convenience
pub use error::{Error, Result};
