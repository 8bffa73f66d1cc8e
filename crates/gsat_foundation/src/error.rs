//! Error types for guarded saturation.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Unification failure and timeouts are not errors: the unifier returns
//! `None` and a timed-out run reports its outcome on the result.

use std::fmt;

use thiserror::Error;

/// The main error type for saturation operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unguarded rule error.
    #[must_use]
    pub fn unguarded_rule(rule: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnguardedRule { rule: rule.into() })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(symbol: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            symbol: symbol.into(),
            expected,
            actual,
        })
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error is recoverable by discarding the offending rule.
    #[must_use]
    pub fn is_discardable(&self) -> bool {
        matches!(self.kind, ErrorKind::UnguardedRule { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No body atom covers every universally quantified variable.
    #[error("unguarded rule: {rule}")]
    UnguardedRule {
        /// Rendered form of the offending rule.
        rule: String,
    },

    /// A predicate or function symbol was applied to the wrong number of terms.
    #[error("arity mismatch for {symbol}: expected {expected}, got {actual}")]
    ArityMismatch {
        /// The predicate or function symbol name.
        symbol: String,
        /// Declared arity.
        expected: usize,
        /// Number of terms supplied.
        actual: usize,
    },

    /// The upstream parser handed over a dependency that violates the input contract.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Position of the offending dependency in the input collection.
    pub input_index: Option<usize>,
    /// Rendered form of the offending dependency.
    pub dependency: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input position.
    #[must_use]
    pub fn with_input_index(mut self, index: usize) -> Self {
        self.input_index = Some(index);
        self
    }

    /// Sets the rendered dependency.
    #[must_use]
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependency = Some(dependency.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.input_index {
            write!(f, "at input #{index}")?;
        }
        if let Some(dependency) = &self.dependency {
            write!(f, " ({dependency})")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
