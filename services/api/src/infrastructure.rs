// Infrastructure layer modules
pub mod logging;
pub mod logging_config;

// Re-exports
#[cfg(test)]
pub use logging::init_test_logging;
pub use logging::{init_logging, init_logging_with};
pub use logging_config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};
