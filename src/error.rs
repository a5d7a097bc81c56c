//! All errors related to parsing commit messages.

use winnow::error::{ContextError, StrContext};

use crate::parser::{DESCRIPTION, SCOPE, SEPARATOR, TYPE};

/// The error returned when parsing a message or building one of its parts
/// fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,

    context: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    pub(crate) fn set_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Map a failed header parse to the kind of the innermost labelled
    /// grammar rule.
    pub(crate) fn with_winnow(header: &str, err: &ContextError) -> Self {
        // Every header rule is labelled.
        let kind = err
            .context()
            .find_map(|c| match c {
                StrContext::Label(TYPE) => Some(ErrorKind::MissingType),
                StrContext::Label(SCOPE) => Some(ErrorKind::InvalidScope),
                StrContext::Label(SEPARATOR) => Some(ErrorKind::MissingSeparator),
                StrContext::Label(DESCRIPTION) => Some(ErrorKind::MissingDescription),
                _ => None,
            })
            .unwrap_or(ErrorKind::MissingType);

        Self::new(kind).set_context(header)
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending input, when known.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Whether the whole message was rejected because its header is not a
    /// Conventional Commit header.
    ///
    /// Callers are expected to skip such commits rather than abort.
    pub fn is_header_error(&self) -> bool {
        self.kind.is_header_error()
    }
}

/// All possible error kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The commit type is missing from the header.
    #[error("missing type definition")]
    MissingType,

    /// The scope is empty or not closed.
    #[error("invalid scope format")]
    InvalidScope,

    /// The header has no `": "` between the type and the description.
    #[error("missing `: ` separator")]
    MissingSeparator,

    /// The description of the commit is missing or blank.
    #[error("missing commit description")]
    MissingDescription,

    /// A commit type was built from blank or malformed text.
    #[error("invalid commit type")]
    InvalidType,

    /// A footer name was built from blank or malformed text.
    #[error("invalid footer name")]
    InvalidFooterName,

    /// A footer value was built from blank text.
    #[error("invalid footer value")]
    InvalidFooterValue,

    /// A footer separator other than `": "` or `" #"`.
    #[error("invalid footer separator")]
    InvalidFooterSeparator,
}

impl ErrorKind {
    /// Whether this kind is produced by the header grammar.
    pub fn is_header_error(self) -> bool {
        matches!(
            self,
            ErrorKind::MissingType
                | ErrorKind::InvalidScope
                | ErrorKind::MissingSeparator
                | ErrorKind::MissingDescription
        )
    }
}
