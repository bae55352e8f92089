//! Console logger implementation

use super::traits::Logger;

/// A logger that writes info to stdout and everything else to stderr
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    show_debug: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with the default `[SessionTools]` prefix
    ///
    /// Debug lines are only printed when `SESSION_TOOLS_DEBUG` is `1` or `true`.
    pub fn new() -> Self {
        let show_debug = std::env::var("SESSION_TOOLS_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            prefix: "[SessionTools]".to_string(),
            show_debug,
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Force debug output on or off regardless of the environment
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.show_debug = enabled;
        self
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if self.show_debug {
            eprintln!("{} DEBUG: {}", self.prefix, message);
        }
    }

    fn info(&self, message: &str) {
        println!("{} INFO: {}", self.prefix, message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} WARN: {}", self.prefix, message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} ERROR: {}", self.prefix, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[SessionTools]");

        let custom = ConsoleLogger::with_prefix("[Host]").with_debug(true);
        assert_eq!(custom.prefix, "[Host]");
        assert!(custom.show_debug);
    }
}
