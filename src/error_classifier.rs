use crate::logging::LogLevel;
use crate::poller::PollError;
use crate::source::error::SourceError;

/// Maps poll failures to the level they are displayed at.
///
/// Classification only affects presentation; every failure is retried on the
/// next tick regardless.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_poll_error(&self, error: &PollError) -> LogLevel {
        match error {
            // Server has no data yet
            PollError::EmptyPayload => LogLevel::Info,
            PollError::Source(source) => self.classify_source_error(source),
        }
    }

    pub fn classify_source_error(&self, error: &SourceError) -> LogLevel {
        match error {
            // Temporary server issues
            SourceError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong URL or server not serving /data
            SourceError::Http { .. } => LogLevel::Error,

            // Malformed responses
            SourceError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            SourceError::Reqwest(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> PollError {
        PollError::Source(SourceError::Http {
            status,
            message: String::new(),
        })
    }

    #[test]
    fn classifies_each_failure_kind() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_poll_error(&http(503)), LogLevel::Warn);
        assert_eq!(classifier.classify_poll_error(&http(404)), LogLevel::Error);
        assert_eq!(
            classifier.classify_poll_error(&PollError::EmptyPayload),
            LogLevel::Info
        );

        let decode = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_poll_error(&PollError::Source(SourceError::Decode(decode))),
            LogLevel::Error
        );
    }
}
