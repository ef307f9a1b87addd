//! Error types for packet assembly.

use std::fmt;
use thiserror::Error;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What an incomplete attachment lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    File,
    Keyword,
    FileAndKeyword,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::File => write!(f, "a file"),
            Missing::Keyword => write!(f, "a keyword"),
            Missing::FileAndKeyword => write!(f, "a file and a keyword"),
        }
    }
}

/// Inputs are not complete enough to build a packet. Nothing was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("agenda summary file is required")]
    MissingPrimaryFile,
    #[error("agenda summary title is required; the description has no usable words")]
    MissingPrimaryTitle,
    #[error("attachment {position} is missing {missing}")]
    IncompleteAttachment { position: usize, missing: Missing },
}

/// Failure of a packet assembly attempt.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Another assembly is still in flight.
    #[error("a packet is already being assembled")]
    Busy,
    /// Anything validation could not foresee (unreadable file, archive or
    /// delivery failure). No archive was delivered.
    #[error("unknown error while building the packet")]
    Unknown(#[source] BoxError),
}

impl PackageError {
    pub(crate) fn unknown(err: impl Into<BoxError>) -> Self {
        PackageError::Unknown(err.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PackageError::Validation(_))
    }
}
