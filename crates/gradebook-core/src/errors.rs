use anyhow::Error;
use std::fmt;

/// Broad category of an application error.
///
/// The roster has no transport layer, so errors carry a domain kind rather
/// than an HTTP status. Callers that put a transport in front of the roster
/// can map each kind to whatever their protocol needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be parsed or was missing a required piece.
    InvalidInput,
    /// The input parsed but failed validation rules.
    Unprocessable,
    /// The referenced record does not exist.
    NotFound,
    /// Anything else.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::Unprocessable => "unprocessable",
            Self::NotFound => "not found",
            Self::Internal => "internal error",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn invalid_input<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::InvalidInput, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unprocessable, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }
}

// Display only. AppError deliberately does not implement std::error::Error,
// which keeps the blanket From below coherent.
impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
