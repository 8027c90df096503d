//! Error types for JID parsing and normalization.

use std::fmt;

/// Errors that can occur when constructing or preparing a JID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JidError {
    /// The input that failed (the whole address, or the offending component)
    pub input: String,
    /// The specific error that occurred
    pub kind: JidErrorKind,
}

/// Specific JID error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JidErrorKind {
    /// The value cannot be turned into a JID
    InvalidArgument {
        /// Why the value was rejected
        reason: &'static str,
    },
    /// The normalizer rejected one of the components
    Normalization {
        /// Which component was being normalized
        part: Part,
        /// The normalizer's error
        error: NormalizeError,
    },
}

impl JidError {
    pub(crate) fn invalid_argument(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            kind: JidErrorKind::InvalidArgument { reason },
        }
    }

    pub(crate) fn normalization(input: impl Into<String>, part: Part, error: NormalizeError) -> Self {
        Self {
            input: input.into(),
            kind: JidErrorKind::Normalization { part, error },
        }
    }

    /// Returns true if a normalizer rejected a prohibited character.
    #[must_use]
    pub const fn is_prohibited_character(&self) -> bool {
        matches!(
            self.kind,
            JidErrorKind::Normalization {
                error: NormalizeError::ProhibitedCharacter { .. },
                ..
            }
        )
    }
}

impl fmt::Display for JidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JidErrorKind::InvalidArgument { reason } => {
                write!(f, "invalid JID argument '{}': {reason}", self.input)
            }
            JidErrorKind::Normalization { part, error } => {
                write!(f, "cannot prepare {part} '{}': {error}", self.input)
            }
        }
    }
}

impl std::error::Error for JidError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            JidErrorKind::InvalidArgument { .. } => None,
            JidErrorKind::Normalization { error, .. } => Some(error),
        }
    }
}

/// A component of a JID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// The local part (before `@`)
    Local,
    /// The domain part
    Domain,
    /// The resource part (after `/`)
    Resource,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local part"),
            Self::Domain => write!(f, "domain"),
            Self::Resource => write!(f, "resource"),
        }
    }
}

/// A stringprep profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Local part profile (RFC 6122 appendix A)
    Nodeprep,
    /// Resource profile (RFC 6122 appendix B)
    Resourceprep,
    /// Domain profile (RFC 3491)
    Nameprep,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nodeprep => write!(f, "nodeprep"),
            Self::Resourceprep => write!(f, "resourceprep"),
            Self::Nameprep => write!(f, "nameprep"),
        }
    }
}

/// Errors raised by a [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The profile forbids a character of the input
    ProhibitedCharacter {
        /// Profile that rejected the input
        profile: Profile,
        /// Normalizer-specific description
        detail: String,
    },
    /// A punycode label could not be decoded
    MalformedLabel {
        /// The label as given
        label: String,
    },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProhibitedCharacter { profile, detail } => {
                write!(f, "{profile} rejected input: {detail}")
            }
            Self::MalformedLabel { label } => {
                write!(f, "label '{label}' is not valid punycode")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}
