use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Callers need to match on the failure category (a bad index is handled differently from a bad initializer)
- No dependencies to compile and integrate beyond tracing-error
- More transparency into error handling logic
 */

/// Error variants that can occur in fixarr operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// An array was declared with size zero, or its initializer length does not match the declared size
    InvalidLength { declared: usize, supplied: usize },

    /// An index outside `[0, len)` was used to address an array element
    IndexOutOfBounds { index: usize, len: usize },

    /// The operation is not defined for the array's element type
    UnsupportedOperation {
        operation: &'static str,
        element_type: &'static str,
    },

    /// Integer arithmetic left the range of the element type
    ArithmeticOverflow {
        operation: &'static str,
        element_type: &'static str,
    },

    /// Storage for the requested number of elements cannot be allocated
    CapacityExceeded {
        requested: usize,
        element_type: &'static str,
    },

    /// Caller supplied a value the operation cannot work with
    InvalidInput { message: String },

    /// File system operation failed
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidLength {
                declared: 0,
                supplied,
            } => write!(
                f,
                "Invalid length: array size must be greater than zero (initializer supplies {} elements)",
                supplied
            ),
            ErrorKind::InvalidLength { declared, supplied } => write!(
                f,
                "Invalid length: declared size {} but initializer supplies {} elements",
                declared, supplied
            ),
            ErrorKind::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {} is outside [0, {})", index, len)
            }
            ErrorKind::UnsupportedOperation {
                operation,
                element_type,
            } => write!(
                f,
                "Unsupported operation: {} is not defined for element type {}",
                operation, element_type
            ),
            ErrorKind::ArithmeticOverflow {
                operation,
                element_type,
            } => write!(
                f,
                "Arithmetic overflow: {} exceeded the range of {}",
                operation, element_type
            ),
            ErrorKind::CapacityExceeded {
                requested,
                element_type,
            } => write!(
                f,
                "Capacity exceeded: cannot allocate {} elements of {}",
                requested, element_type
            ),
            ErrorKind::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/* 📖 # Why separate ErrorKind and FixarrError?
ErrorKind carries the structural facts (which index, which declared size).
FixarrError wraps it with the runtime context accumulated while the error propagates,
an optional underlying cause and the span trace captured where the error was created.
Callers match on `kind()`; humans read the Debug tree.
*/

/// Error type wrapping [`ErrorKind`] with context, cause and span trace.
pub struct FixarrError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<FixarrError>>,
    span_trace: SpanTrace,
}

impl FixarrError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    /// Creates a [`ErrorKind::Message`] error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that caused this one.
    pub fn caused_by(mut self, cause: impl Into<Box<FixarrError>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the context strings in the order they were attached.
    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        let branches = self.context.len() + usize::from(self.cause.is_some());
        for (i, ctx) in self.context.iter().enumerate() {
            let glyph = if i + 1 == branches { "└─" } else { "├─" };
            writeln!(f, "{}{} {}", indent, glyph, ctx)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, "{}└─ cause: ", indent)?;
            cause.fmt_tree(f, &format!("{}   ", indent))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for FixarrError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ErrorKind> for Box<FixarrError> {
    fn from(kind: ErrorKind) -> Self {
        Box::new(FixarrError::new(kind))
    }
}

impl StdError for FixarrError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        if let Some(cause) = &self.cause {
            return Some(cause.as_ref());
        }
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for FixarrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ctx in &self.context {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.kind)
    }
}

/* 📖 # Why a tree-shaped Debug output?
Errors reach a human through `{:?}` in test failures and the CLI.
Listing the message first, then context and causes as branches, and the span trace last
keeps the most specific information at the top.
*/

impl fmt::Debug for FixarrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why use Box<FixarrError> in the result type?

Boxing the error keeps `FixarrResult<T>` small, which matters for the hot accessors
(`get` returns a single element in the success case).
*/

/// Standard result type for fixarr operations.
pub type FixarrResult<T> = std::result::Result<T, Box<FixarrError>>;

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    fn context(self, context: impl Into<String>) -> FixarrResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> FixarrResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for FixarrResult<T> {
    fn context(self, context: impl Into<String>) -> FixarrResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> FixarrResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}

/// Creates a boxed [`ErrorKind::Message`] error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::FixarrError::message(format!($($arg)*)))
    };
}
