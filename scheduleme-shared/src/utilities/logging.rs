use serde_json::json;
use log::{info, error};
use tracing_subscriber::EnvFilter;

/// Installs the process-wide subscriber. `log` records from handlers are
/// bridged into it, so a single `RUST_LOG` filter governs both facades.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        eprintln!("Logger already initialised: {}", e);
    }
}

/// Logs an informational event to CloudWatch in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs an error event to CloudWatch in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}
