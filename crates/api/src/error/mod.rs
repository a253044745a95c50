//! Error handling for the chainxor codec
//!
//! Validation is all-or-nothing at entry: every public operation checks its
//! arguments before touching a single byte, and once validation passes the
//! transform cannot fail. Errors are returned to the caller, never logged
//! or swallowed.

#[cfg(feature = "std")]
use std::string::String;

pub mod validate;

/// Primary error type for codec operations
///
/// There is exactly one failure mode: an argument that fails validation at
/// an entry point (an empty key). The variant carries the entry point that
/// rejected it and the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument error
    InvalidArgument {
        /// Entry point that rejected the argument
        context: &'static str,
        /// Why the argument was rejected
        reason: &'static str,
        #[cfg(feature = "std")]
        /// Optional detail attached via [`Error::with_message`]
        message: String,
    },
}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type specialized for transform operations
pub type CodecResult<T> = Result<T>;

impl Error {
    /// Shorthand to create an `InvalidArgument` error
    pub fn invalid_argument(context: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument {
            context,
            reason,
            #[cfg(feature = "std")]
            message: String::new(),
        }
    }

    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { reason, .. } => Self::InvalidArgument {
                context,
                reason,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidArgument {
                context, reason, ..
            } => Self::InvalidArgument {
                context,
                reason,
                message,
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidArgument {
                context,
                reason,
                message,
            } => {
                if message.is_empty() {
                    write!(f, "Invalid argument in {}: {}", context, reason)
                } else {
                    write!(f, "Invalid argument in {}: {}: {}", context, reason, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidArgument { context, reason } => {
                write!(f, "Invalid argument in {}: {}", context, reason)
            }
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
