use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Only the first directive matters, e.g. "login_screen=debug,hyper=info"
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .trim()
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

/// Installs a stderr logger for the `log` facade, filtered by `RUST_LOG`
/// (warnings and above when unset).
///
/// Not used by the TUI: it owns the terminal, and its diagnostics go through
/// the activity panel instead.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("WARNING"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Module-specific formats
        assert_eq!(parse_rust_log_level("login_screen=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("login_screen=debug,tokio=info"),
            LogLevel::Debug
        );

        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }
}
