// Copyright (c) 2020-2024 the svgen developers

//! Error types shared by the node model and emission layers.

use std::error::Error;
use std::fmt;

/// An error produced when constructing or assembling declaration nodes.
///
/// All failures in this layer are immediate construction-time rejections.
/// Nothing is caught or recovered here; the caller decides whether to abort
/// generation for the enclosing module or report a diagnostic for the
/// offending declaration.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstError {
    /// A required identifier or name list did not meet its structural
    /// constraints.
    InvalidArgument(String),
}

impl AstError {
    /// Create a new `InvalidArgument` error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> AstError {
        AstError::InvalidArgument(message.into())
    }

    /// Return the error message.
    pub fn message(&self) -> &str {
        match *self {
            AstError::InvalidArgument(ref msg) => msg,
        }
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AstError::InvalidArgument(ref msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for AstError {}

/// A node construction result type. Either carries the result `T` in the Ok
/// variant, or the rejection in the Err variant.
pub type AstResult<T> = Result<T, AstError>;
