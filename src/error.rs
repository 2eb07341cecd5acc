use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not read the image file at '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("No QR code found in the image")]
    NoDetections,

    #[error("Payload of detection #{index} is not valid UTF-8")]
    Decode {
        index: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Decoder error: {0}")]
    Decoder(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// The message followed by every underlying cause, joined with `: `
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Config(err.to_string())
    }
}
