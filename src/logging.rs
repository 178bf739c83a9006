use log::{Level, LevelFilter};
use std::env;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::Trace,
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Warn => Level::Warn,
            LogLevel::Error => Level::Error,
        }
    }
}

/// `RUST_LOG` target matching this crate's events.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

impl LogLevel {
    /// `off` has no quieter counterpart here, so it maps to errors only.
    fn from_filter(filter: LevelFilter) -> Self {
        match filter {
            LevelFilter::Trace => LogLevel::Trace,
            LevelFilter::Debug => LogLevel::Debug,
            LevelFilter::Info => LogLevel::Info,
            LevelFilter::Warn => LogLevel::Warn,
            LevelFilter::Error | LevelFilter::Off => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    env::var("RUST_LOG")
        .map(|rust_log| parse_rust_log_level(&rust_log))
        .unwrap_or(LogLevel::Info)
}

/// Threshold for this crate from a `RUST_LOG` value.
///
/// A directive naming this crate (or one of its modules) wins over a bare
/// level. Directives for other crates are ignored. Info when nothing applies.
pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    let mut global = None;
    let mut scoped = None;
    for directive in rust_log.split(',').map(str::trim) {
        match directive.split_once('=') {
            Some((target, level)) if targets_this_crate(target.trim()) => {
                scoped = level.trim().parse::<LevelFilter>().ok().or(scoped);
            }
            Some(_) => {}
            None => global = directive.parse::<LevelFilter>().ok().or(global),
        }
    }
    scoped
        .or(global)
        .map(LogLevel::from_filter)
        .unwrap_or(LogLevel::Info)
}

fn targets_this_crate(target: &str) -> bool {
    target == CRATE_TARGET
        || target
            .strip_prefix(CRATE_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    let threshold = get_rust_log_level();
    should_log(event_level, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("INFO"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);
        assert_eq!(parse_rust_log_level("off"), LogLevel::Error);

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
        assert_eq!(parse_rust_log_level(""), LogLevel::Info);
    }

    #[test]
    fn crate_directive_beats_global_level() {
        assert_eq!(parse_rust_log_level("agri_dashboard=debug"), LogLevel::Debug);
        assert_eq!(
            parse_rust_log_level("reqwest=info, agri_dashboard=trace"),
            LogLevel::Trace
        );
        assert_eq!(
            parse_rust_log_level("warn,agri_dashboard::poller=debug"),
            LogLevel::Debug
        );
        assert_eq!(
            parse_rust_log_level("agri_dashboard=error,debug"),
            LogLevel::Error
        );
    }

    #[test]
    fn other_crates_do_not_set_the_threshold() {
        assert_eq!(parse_rust_log_level("reqwest=trace"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("hyper=trace,warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("agri_dashboard_extra=trace"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn test_level_bridges_to_log_crate() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(Level::from(LogLevel::Error), Level::Error);
    }
}
