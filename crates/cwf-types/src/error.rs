//! Error types for the watchface engine.

use std::io;

/// Errors produced by the watchface engine and its collaborators.
///
/// None of these abort a render: the apply pipeline recovers every one of
/// them locally with a documented default.
#[derive(Debug, thiserror::Error)]
pub enum CwfError {
    #[error("invalid color spec: {0}")]
    InvalidColorSpec(String),

    #[error("invalid device context: {0}")]
    InvalidDeviceContext(String),

    #[error("resource read failure: {0}")]
    ResourceRead(String),

    #[error("image error: {0}")]
    Image(String),

    #[error("skin store error: {0}")]
    Store(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CwfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_display() {
        let e = CwfError::InvalidColorSpec("#12".into());
        assert_eq!(format!("{e}"), "invalid color spec: #12");
    }

    #[test]
    fn invalid_device_context_display() {
        let e = CwfError::InvalidDeviceContext("width is 0".into());
        assert_eq!(format!("{e}"), "invalid device context: width is 0");
    }

    #[test]
    fn resource_read_display() {
        let e = CwfError::ResourceRead("watchface_custom".into());
        assert_eq!(format!("{e}"), "resource read failure: watchface_custom");
    }

    #[test]
    fn store_error_display() {
        let e = CwfError::Store("no such skin".into());
        assert_eq!(format!("{e}"), "skin store error: no such skin");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: CwfError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: CwfError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: CwfError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(CwfError::Image("truncated".into()));
        assert!(r.is_err());
    }
}
