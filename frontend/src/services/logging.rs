use gloo::net::http::Request;
use log::{Level, LevelFilter, Log, Metadata, Record};
use shared::ClientLogRecord;
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;

/// Browser-side `log` backend.
///
/// Records go to the browser console tagged with their component (the log
/// target). With remote logging enabled, warnings and errors are also posted
/// to the backend log collector.
pub struct Logger {
    level: LevelFilter,
    remote_endpoint: Option<String>,
}

impl Logger {
    /// Install the logger as the global `log` backend.
    pub fn init(config: &AppConfig) -> Result<(), log::SetLoggerError> {
        let logger = Logger {
            level: config.log_level,
            remote_endpoint: config.remote_logging.then(|| config.endpoint("/api/logs")),
        };
        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(config.log_level);
        Ok(())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }

    fn forward(&self, record: &Record) {
        let Some(endpoint) = self.remote_endpoint.clone() else {
            return;
        };
        if record.level() > Level::Warn {
            return;
        }
        let body = ClientLogRecord {
            level: record.level().as_str().to_lowercase(),
            message: record.args().to_string(),
            component: Some(record.target().to_string()),
        };

        // Fire and forget; a failing collector must not produce more logs
        spawn_local(async move {
            if let Ok(request) = Request::post(&endpoint).json(&body) {
                let _ = request.send().await;
            }
        });
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
        self.forward(record);
    }

    fn flush(&self) {}
}
