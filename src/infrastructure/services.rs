use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};

/// Writes log lines to the browser console on wasm32 and to stderr elsewhere.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        let line = entry.format_line();

        #[cfg(target_arch = "wasm32")]
        {
            let line = wasm_bindgen::JsValue::from_str(&line);
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
                LogLevel::Info => web_sys::console::info_1(&line),
                LogLevel::Warn => web_sys::console::warn_1(&line),
                LogLevel::Error => web_sys::console::error_1(&line),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{}", line);
    }
}

/// Wall-clock milliseconds since the Unix epoch
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    #[cfg(target_arch = "wasm32")]
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn current_timestamp(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }

    /// `HH:MM:SS.mmm` in UTC
    fn format_timestamp(&self, timestamp: u64) -> String {
        let millis = timestamp % 1000;
        let total_seconds = timestamp / 1000;
        let seconds = total_seconds % 60;
        let minutes = (total_seconds / 60) % 60;
        let hours = (total_seconds / 3600) % 24;
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }
}
