use std::fmt;

use thiserror::Error;

/// Result of the fallible object operations
pub type Result<T> = std::result::Result<T, ObjUtilError>;

/// Stable classification shared by every error the crate reports
///
/// Callers and log assertions branch on the kind or its code, never on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExErrorKind {
    /// A required collaborator was not registered before use
    Configuration,
    /// Caller supplied input the operation cannot work with
    InvalidInput,
    Internal,
}

impl ExErrorKind {
    /// Code emitted as `err.code` in log events
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

impl fmt::Display for ExErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured error: a kind plus the operation and message it came with
///
/// Built with `ExError::new(kind).with_op(..).with_message(..)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Name the operation that failed
    pub fn with_op(self, op: impl Into<String>) -> Self {
        Self {
            op: Some(op.into()),
            ..self
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self
        }
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `[CODE] in operation 'op': message`, omitting the parts that are unset
impl fmt::Display for ExError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        match self.message.as_str() {
            "" => Ok(()),
            message => write!(f, ": {}", message),
        }
    }
}

impl std::error::Error for ExError {}

/// Domain errors raised by ObjUtil operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjUtilError {
    /// `pick` with explicit keys on a rich mapping needs a key-set factory
    #[error(
        "{op}: no key-set factory registered; call register_key_set_factory() before picking keys from a rich mapping"
    )]
    CollaboratorNotRegistered { op: String },
}

impl ObjUtilError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            ObjUtilError::CollaboratorNotRegistered { .. } => ExErrorKind::Configuration,
        }
    }

    /// Operation the error surfaced from
    pub fn op(&self) -> &str {
        match self {
            ObjUtilError::CollaboratorNotRegistered { op } => op,
        }
    }
}

impl From<ObjUtilError> for ExError {
    fn from(err: ObjUtilError) -> Self {
        ExError::new(err.kind())
            .with_op(err.op())
            .with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_is_code() {
        for kind in [
            ExErrorKind::Configuration,
            ExErrorKind::InvalidInput,
            ExErrorKind::Internal,
        ] {
            assert_eq!(kind.to_string(), kind.code());
        }
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("keys")
            .with_message("bad options");
        assert_eq!(
            err.to_string(),
            "[ERR_INVALID_INPUT] in operation 'keys': bad options"
        );
    }

    #[test]
    fn test_display_without_context() {
        let err = ExError::new(ExErrorKind::Internal);
        assert_eq!(err.to_string(), "[ERR_INTERNAL]");
    }

    #[test]
    fn test_domain_error_keeps_op_and_message() {
        let err = ObjUtilError::CollaboratorNotRegistered {
            op: "pick".to_string(),
        };
        let ex = ExError::from(err.clone());

        assert_eq!(ex.kind(), err.kind());
        assert_eq!(ex.op(), Some("pick"));
        assert_eq!(ex.message(), err.to_string());
    }
}
