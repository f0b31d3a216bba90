// URL handling utilities
pub mod url_builder;

// Timing utilities
pub mod delay;

// Re-export all utilities for convenient access
pub use url_builder::absolute_url;
pub use delay::delay;
