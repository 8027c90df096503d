//! Pluggable string normalization for JID components.
//!
//! Two strategies implement [`Normalizer`]:
//!
//! - [`StringprepNormalizer`] (feature `stringprep`): the RFC 3454 profiles
//!   nodeprep, resourceprep and nameprep.
//! - [`FallbackNormalizer`]: lower-cases local parts and domains, leaves
//!   resources untouched, and never fails. Correct for ASCII input only.
//!
//! The strategy used by the crate-level functions is chosen once per
//! process by [`detect`].

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

use crate::constants::{ACE_PREFIX, LABEL_SEPARATOR, LABEL_SEPARATORS};
use crate::error::NormalizeError;
#[cfg(feature = "stringprep")]
use crate::error::Profile;

/// Normalization primitives used by the prep pipeline.
///
/// Implementations must be pure: the same input always yields the same
/// output.
pub trait Normalizer: Send + Sync + fmt::Debug {
    /// Returns true if this strategy implements the full stringprep profiles.
    fn is_available(&self) -> bool;

    /// Normalizes a local part.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::ProhibitedCharacter`] if the profile forbids
    /// the input.
    fn nodeprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError>;

    /// Normalizes a resource. Case is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::ProhibitedCharacter`] if the profile forbids
    /// the input.
    fn resourceprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError>;

    /// Normalizes a whole domain.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::ProhibitedCharacter`] if the profile forbids
    /// the input.
    fn nameprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError>;

    /// Decodes a domain label from its ASCII-compatible encoding.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MalformedLabel`] if a punycode payload
    /// cannot be decoded.
    fn to_unicode<'a>(&self, label: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        decode_label(label)
    }
}

/// Lossy normalizer used when stringprep is unavailable.
///
/// # Examples
///
/// ```
/// use xmpp_jid::{FallbackNormalizer, Normalizer};
///
/// let n = FallbackNormalizer;
/// assert_eq!(n.nodeprep("Juliet").unwrap(), "juliet");
/// assert_eq!(n.resourceprep("Balcony").unwrap(), "Balcony");
/// assert!(!n.is_available());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackNormalizer;

impl Normalizer for FallbackNormalizer {
    fn is_available(&self) -> bool {
        false
    }

    fn nodeprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        Ok(lowercase(input))
    }

    fn resourceprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        Ok(Cow::Borrowed(input))
    }

    fn nameprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        Ok(lowercase(input))
    }
}

/// Full-fidelity normalizer backed by the `stringprep` crate.
#[cfg(feature = "stringprep")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringprepNormalizer;

#[cfg(feature = "stringprep")]
impl StringprepNormalizer {
    fn rejected(profile: Profile, err: &stringprep::Error) -> NormalizeError {
        log::debug!("{profile} rejected input: {err}");
        NormalizeError::ProhibitedCharacter {
            profile,
            detail: err.to_string(),
        }
    }

    /// Checks that the profiles behave as expected on this build.
    fn probe() -> bool {
        matches!(stringprep::nodeprep("A"), Ok(ref s) if s == "a")
    }
}

#[cfg(feature = "stringprep")]
impl Normalizer for StringprepNormalizer {
    fn is_available(&self) -> bool {
        true
    }

    fn nodeprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        stringprep::nodeprep(input).map_err(|e| Self::rejected(Profile::Nodeprep, &e))
    }

    fn resourceprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        stringprep::resourceprep(input).map_err(|e| Self::rejected(Profile::Resourceprep, &e))
    }

    fn nameprep<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, NormalizeError> {
        stringprep::nameprep(input).map_err(|e| Self::rejected(Profile::Nameprep, &e))
    }
}

static DETECTED: OnceLock<&'static dyn Normalizer> = OnceLock::new();

/// Returns the process-wide normalizer, selecting it on first use.
///
/// With the `stringprep` feature the full strategy is used when it passes a
/// self-check; otherwise [`FallbackNormalizer`] is used. The choice never
/// changes afterwards.
#[must_use]
pub fn detect() -> &'static dyn Normalizer {
    *DETECTED.get_or_init(|| {
        let selected = select();
        log::debug!(
            "selected {selected:?} (full stringprep: {})",
            selected.is_available()
        );
        selected
    })
}

/// Returns true if the process-wide normalizer implements full stringprep.
///
/// # Examples
///
/// ```
/// if !xmpp_jid::available() {
///     // Non-ASCII addresses are lower-cased but not fully normalized.
/// }
/// ```
#[must_use]
pub fn available() -> bool {
    detect().is_available()
}

#[cfg(feature = "stringprep")]
fn select() -> &'static dyn Normalizer {
    if StringprepNormalizer::probe() {
        &StringprepNormalizer
    } else {
        log::warn!("stringprep self-check failed; using lossy fallback normalization");
        &FallbackNormalizer
    }
}

#[cfg(not(feature = "stringprep"))]
fn select() -> &'static dyn Normalizer {
    &FallbackNormalizer
}

fn lowercase(input: &str) -> Cow<'_, str> {
    let lowered = input.to_lowercase();
    if lowered == input {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(lowered)
    }
}

/// Decodes every `xn--` sub-label of `label`.
///
/// Sub-labels are separated by any IDNA label separator and rejoined with `.`.
fn decode_label(label: &str) -> Result<Cow<'_, str>, NormalizeError> {
    let needs_work = label.contains(ACE_PREFIX)
        || label
            .chars()
            .any(|c| c != LABEL_SEPARATOR && LABEL_SEPARATORS.contains(&c));
    if !needs_work {
        return Ok(Cow::Borrowed(label));
    }

    let decoded = label
        .split(LABEL_SEPARATORS)
        .map(|part| match part.strip_prefix(ACE_PREFIX) {
            Some(payload) => idna::punycode::decode_to_string(&payload.to_lowercase()).ok_or_else(
                || NormalizeError::MalformedLabel {
                    label: part.to_string(),
                },
            ),
            None => Ok(part.to_string()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Cow::Owned(decoded.join(".")))
}
