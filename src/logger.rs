use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogLevel {
    Info,
    Warn,
    Success,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Success => "ok",
            LogLevel::Error => "error",
        }
    }

    fn always_shown(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    quiet: bool,
}

impl Logger {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        !self.quiet || level.always_shown()
    }
}

/// Diagnostics go to stderr so stdout stays clean for `--json`.
pub fn log(logger: &Logger, level: LogLevel, msg: impl Into<String>) {
    if !logger.enabled(level) {
        return;
    }

    let _ = writeln!(io::stderr().lock(), "{}", format_line(level, &msg.into()));
}

fn format_line(level: LogLevel, msg: &str) -> String {
    format!("[seqbr:{}] {}", level.tag(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_keeps_warnings_and_errors() {
        let l = Logger::new(true);
        assert!(!l.enabled(LogLevel::Info));
        assert!(!l.enabled(LogLevel::Success));
        assert!(l.enabled(LogLevel::Warn));
        assert!(l.enabled(LogLevel::Error));
    }

    #[test]
    fn line_carries_level_tag() {
        assert_eq!(format_line(LogLevel::Success, "done"), "[seqbr:ok] done");
    }
}
