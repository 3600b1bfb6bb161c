//! Error types for `fxlab-settings`.
//!
//! Fallible operations at the crate's edges (store and probe
//! implementations) return [`SettingsResult<T>`], an alias for
//! `Result<T, SettingsError>`. The coordinator itself absorbs these
//! errors; see [`crate::settings`].

/// Unified error type for store and probe operations.
///
/// Each variant carries just enough context for a log line or a
/// caller-side message.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The persisted settings document could not be parsed.
    #[error("store parse error: {0}")]
    StoreParse(String),

    /// A value could not be encoded for the settings document.
    #[error("store encode error: {0}")]
    StoreEncode(String),

    /// An image file could not be probed for its dimensions.
    #[error("image probe error: {0}")]
    Probe(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `fxlab-settings`.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_parse_displays_message() {
        let err = SettingsError::StoreParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "store parse error: unexpected token");
    }

    #[test]
    fn store_encode_displays_message() {
        let err = SettingsError::StoreEncode("unsupported value".to_string());
        assert_eq!(err.to_string(), "store encode error: unsupported value");
    }

    #[test]
    fn probe_displays_message() {
        let err = SettingsError::Probe("bad magic bytes".to_string());
        assert_eq!(err.to_string(), "image probe error: bad magic bytes");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SettingsError = io_err.into();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn settings_result_ok() {
        let result: SettingsResult<u32> = Ok(7);
        assert!(result.is_ok());
    }

    #[test]
    fn error_is_debug() {
        let err = SettingsError::Probe("x".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("Probe"));
    }
}
