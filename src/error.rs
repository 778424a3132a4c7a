use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the frame step (configuration loading and validation).
///
/// The simulation step itself is total; collisions are state transitions, not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A tuning value is out of range or inconsistent with another.
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// Tuning JSON could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Reading a tuning file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidTuning("spawn_interval must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid tuning"));
        assert!(msg.contains("spawn_interval"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: Error = parse.into();
        assert!(matches!(e, Error::Json(_)));
    }
}
