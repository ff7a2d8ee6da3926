use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    quiet: bool,
}

impl Logger {
    fn new(prefix: Option<String>, quiet: bool) -> Self {
        Self {
            prefix,
            quiet,
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.quiet {
            return;
        }
        println!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, quiet: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, quiet));
}

/// Writes through the installed logger; a no-op before [`init_logger`].
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Client".to_string()), false);
        let line = logger.format_line("common/src/terminal/session.rs", 42, "hello");
        assert!(line.ends_with("[Client][session.rs:42] hello"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, false);
        let line = logger.format_line("C:\\work\\main.rs", 7, "started");
        assert!(line.ends_with("[main.rs:7] started"));
        assert!(!line.contains("work"));
    }
}
