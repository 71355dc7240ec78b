use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages. `Conflict` never leaves the engine: it is the signal the
/// upsert protocol uses to switch from insert to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidArgument,
    NotFound,

    // Upsert protocol (internal only)
    Conflict,

    // Backing store
    StoreUnavailable,
    Timeout,
    Migration,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Conflict => "ERR_CONFLICT",
            ExErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Migration => "ERR_MIGRATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation and
/// snippet name it concerns. Snippet content is never attached.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snippet name context
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the snippet name context, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the backing store could not complete the operation.
    ///
    /// Timeouts and migration failures are both flavours of an unusable store.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self.kind,
            ExErrorKind::StoreUnavailable | ExErrorKind::Timeout | ExErrorKind::Migration
        )
    }

    /// True for the internal uniqueness-conflict signal
    pub fn is_conflict(&self) -> bool {
        self.kind == ExErrorKind::Conflict
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.name {
            write!(f, " (name: {:?})", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Validation errors raised before any backing-store interaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    /// Name is the empty string
    #[error("Snippet name cannot be empty")]
    EmptyName,

    /// Name contains only whitespace
    #[error("Snippet name cannot be whitespace-only")]
    BlankName,

    /// Name contains a control character (NUL, newline, tab, ...)
    #[error("Snippet name contains a control character at byte {position}")]
    NameHasControlChars { position: usize },
}

impl From<SnippetError> for ExError {
    fn from(err: SnippetError) -> Self {
        ExError::new(ExErrorKind::InvalidArgument).with_message(err.to_string())
    }
}

/// Identity conversion so `log_op_error!` accepts an `ExError` directly
impl From<&ExError> for ExError {
    fn from(err: &ExError) -> Self {
        err.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidArgument, "ERR_INVALID_ARGUMENT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::Conflict, "ERR_CONFLICT"),
            (ExErrorKind::StoreUnavailable, "ERR_STORE_UNAVAILABLE"),
            (ExErrorKind::Timeout, "ERR_TIMEOUT"),
            (ExErrorKind::Migration, "ERR_MIGRATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_store_unavailable_family() {
        assert!(ExError::new(ExErrorKind::StoreUnavailable).is_store_unavailable());
        assert!(ExError::new(ExErrorKind::Timeout).is_store_unavailable());
        assert!(ExError::new(ExErrorKind::Migration).is_store_unavailable());
        assert!(!ExError::new(ExErrorKind::InvalidArgument).is_store_unavailable());
        assert!(!ExError::new(ExErrorKind::Conflict).is_store_unavailable());
    }

    #[test]
    fn test_display_includes_code_op_and_name() {
        let err = ExError::new(ExErrorKind::StoreUnavailable)
            .with_op("put")
            .with_name("deploy")
            .with_message("database is locked");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_STORE_UNAVAILABLE]"));
        assert!(rendered.contains("'put'"));
        assert!(rendered.contains("database is locked"));
        assert!(rendered.contains("\"deploy\""));
    }

    #[test]
    fn test_snippet_error_maps_to_invalid_argument() {
        let ex: ExError = SnippetError::EmptyName.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidArgument);
        assert_eq!(ex.message(), "Snippet name cannot be empty");
    }
}
