use std::sync::Arc;

/// Specifies a logger type used to log an info message.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a default logger which prints messages to standard output.
pub fn create_info_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}
