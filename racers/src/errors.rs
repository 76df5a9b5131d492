use backtrace::Backtrace;
use serde::{de, ser};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for racer operations.
///
/// Each kind describes one category of failure. Callers that translate errors
/// into responses should use [`RacerError::response_class`] instead of matching
/// on every kind.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A caller supplied identifier is not a well-formed object id
    InvalidId,
    /// The underlying store cannot be reached or has been closed
    StoreUnavailable,
    /// A document with the same `_id` already exists
    UniqueConstraintViolation,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Error mapping a value to/from its serialized form
    ObjectMappingError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidId => write!(f, "Invalid ID"),
            ErrorKind::StoreUnavailable => write!(f, "Store unavailable"),
            ErrorKind::UniqueConstraintViolation => write!(f, "Unique constraint violation"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::ObjectMappingError => write!(f, "Object mapping error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// The class of response a web layer should produce for an error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResponseClass {
    /// The request itself was wrong (4xx).
    ClientError,
    /// The request was fine but the system could not serve it (5xx).
    ServerError,
}

/// Error type for racer operations.
///
/// `RacerError` carries a message, an [`ErrorKind`], an optional cause and the
/// backtrace captured where it was created.
///
/// # Examples
///
/// ```rust
/// use racers::errors::{ErrorKind, RacerError, ResponseClass};
///
/// let err = RacerError::new("bad id", ErrorKind::InvalidId);
/// assert_eq!(err.kind(), &ErrorKind::InvalidId);
/// assert_eq!(err.response_class(), ResponseClass::ClientError);
/// ```
#[derive(Clone)]
pub struct RacerError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<RacerError>>,
    backtrace: Atomic<Backtrace>,
}

impl RacerError {
    /// Creates a new `RacerError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        RacerError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `RacerError` wrapping the error that caused it.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: RacerError) -> Self {
        RacerError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&RacerError> {
        self.cause.as_deref()
    }

    /// Maps this error to the response class a caller should surface.
    ///
    /// Malformed input maps to a client error. Store failures and anything
    /// unexpected map to a server error.
    pub fn response_class(&self) -> ResponseClass {
        match self.error_kind {
            ErrorKind::InvalidId
            | ErrorKind::UniqueConstraintViolation
            | ErrorKind::InvalidOperation => ResponseClass::ClientError,
            ErrorKind::StoreUnavailable
            | ErrorKind::ObjectMappingError
            | ErrorKind::InternalError => ResponseClass::ServerError,
        }
    }
}

impl Display for RacerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for RacerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for RacerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// `RacerResult<T>` is shorthand for `Result<T, RacerError>`.
pub type RacerResult<T> = Result<T, RacerError>;

impl de::Error for RacerError {
    fn custom<T: Display>(msg: T) -> Self {
        RacerError::new(&msg.to_string(), ErrorKind::ObjectMappingError)
    }
}

impl ser::Error for RacerError {
    fn custom<T: Display>(msg: T) -> Self {
        RacerError::new(&msg.to_string(), ErrorKind::ObjectMappingError)
    }
}

impl From<hex::FromHexError> for RacerError {
    fn from(err: hex::FromHexError) -> Self {
        RacerError::new(&format!("Invalid object id: {}", err), ErrorKind::InvalidId)
    }
}

impl From<std::num::ParseIntError> for RacerError {
    fn from(err: std::num::ParseIntError) -> Self {
        RacerError::new(
            &format!("Integer parsing error: {}", err),
            ErrorKind::InvalidOperation,
        )
    }
}

impl From<std::fmt::Error> for RacerError {
    fn from(err: std::fmt::Error) -> Self {
        RacerError::new(&format!("Formatting error: {}", err), ErrorKind::InternalError)
    }
}

impl From<String> for RacerError {
    fn from(msg: String) -> Self {
        RacerError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for RacerError {
    fn from(msg: &str) -> Self {
        RacerError::new(msg, ErrorKind::InternalError)
    }
}
