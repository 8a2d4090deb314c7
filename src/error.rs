// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SubmissionError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Embedded translations are unreadable or incomplete.
    I18n(String),
    Submission(SubmissionError),
    /// The windowing runtime failed to start or crashed.
    Runtime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::I18n(e) => write!(f, "Localization Error: {}", e),
            Error::Submission(e) => write!(f, "Submission Error: {}", e),
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SubmissionError> for Error {
    fn from(err: SubmissionError) -> Self {
        Error::Submission(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_error_formats_properly() {
        let err = Error::I18n("missing message 'hero-title' for en".into());
        assert_eq!(
            format!("{}", err),
            "Localization Error: missing message 'hero-title' for en"
        );
    }

    #[test]
    fn submission_error_converts() {
        let err: Error = SubmissionError::Unavailable("relay offline".into()).into();
        assert!(matches!(err, Error::Submission(_)));
        assert!(format!("{}", err).contains("relay offline"));
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let parse = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
