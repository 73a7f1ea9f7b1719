//! Error types shared by the listers, the walker and the CLI

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The listing service refused or failed a request.
    #[error("failed to list {directory}: {message}")]
    Transport { directory: String, message: String },

    /// HTTP-level failure talking to a filer (connect, timeout, decode).
    #[error("failed to list {directory}: {source}")]
    Http {
        directory: String,
        #[source]
        source: reqwest::Error,
    },

    /// The starting argument cannot be turned into a directory and a name.
    #[error("invalid path '{0}'")]
    InvalidPath(String),

    #[error("page size must be between 1 and {}", u32::MAX)]
    InvalidPageSize,

    /// Writing rendered lines to the output sink failed.
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn transport(directory: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Transport {
            directory: directory.into(),
            message: message.into(),
        }
    }

    /// True for failures that came from the listing service rather than local output.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::Http { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_names_directory() {
        let err = Error::transport("/buckets/a", "permission denied");
        assert_eq!(err.to_string(), "failed to list /buckets/a: permission denied");
        assert!(err.is_transport());
    }

    #[test]
    fn test_io_error_is_not_transport() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("error writing output"));
    }
}
