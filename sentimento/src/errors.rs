//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = SentimentoError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum SentimentoError {
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    DegenerateModel(DegenerateModelError),
    ParseFloatError(std::num::ParseFloatError),
    DecodeError(bincode::error::DecodeError),
    EncodeError(bincode::error::EncodeError),
    IOError(std::io::Error),
}

impl SentimentoError {
    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn degenerate_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::DegenerateModel(DegenerateModelError { msg: msg.into() })
    }
}

impl fmt::Display for SentimentoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidModel(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::DegenerateModel(e) => e.fmt(f),
            Self::ParseFloatError(e) => e.fmt(f),
            Self::DecodeError(e) => e.fmt(f),
            Self::EncodeError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for SentimentoError {}

/// Error used when the model is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// Error used when the training data cannot produce a usable model.
///
/// Raised for an empty corpus, an empty vocabulary, or a zero probability
/// denominator. The current category has to be abandoned.
#[derive(Debug)]
pub struct DegenerateModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for DegenerateModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DegenerateModelError: {}", self.msg)
    }
}

impl Error for DegenerateModelError {}

impl From<std::num::ParseFloatError> for SentimentoError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::ParseFloatError(error)
    }
}

impl From<bincode::error::DecodeError> for SentimentoError {
    fn from(error: bincode::error::DecodeError) -> Self {
        Self::DecodeError(error)
    }
}

impl From<bincode::error::EncodeError> for SentimentoError {
    fn from(error: bincode::error::EncodeError) -> Self {
        Self::EncodeError(error)
    }
}

impl From<std::io::Error> for SentimentoError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}
