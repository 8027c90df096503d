//! Splitting a raw address into its components.
//!
//! ```text
//! [ local "@" ] domain [ "/" resource ]
//! ```
//!
//! The resource starts after the first `/`, the local part ends at the first
//! `@` before it. A separator at position 0 does not split: `@example.com`
//! is a domain of `@example.com`, not an empty local part.

use crate::constants::{LOCAL_SEPARATOR, RESOURCE_SEPARATOR};

/// Unprepared JID components, as fed to the prep pipeline.
///
/// Empty `local` or `resource` values are treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Components<'a> {
    /// The local part, if any
    pub local: Option<&'a str>,
    /// The domain
    pub domain: &'a str,
    /// The resource, if any
    pub resource: Option<&'a str>,
    /// Whether the caller already knows these components are normalization-safe
    pub prepped: bool,
}

impl<'a> Components<'a> {
    /// Creates components for a domain only.
    #[must_use]
    pub const fn new(domain: &'a str) -> Self {
        Self {
            local: None,
            domain,
            resource: None,
            prepped: false,
        }
    }

    /// Sets the local part.
    #[must_use]
    pub const fn with_local(mut self, local: &'a str) -> Self {
        self.local = Some(local);
        self
    }

    /// Sets the resource.
    #[must_use]
    pub const fn with_resource(mut self, resource: &'a str) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Marks the components as already normalization-safe.
    #[must_use]
    pub const fn with_prepped(mut self, prepped: bool) -> Self {
        self.prepped = prepped;
        self
    }
}

/// Splits a raw address into local part, domain and resource.
///
/// No normalization is done here; see [`Prep::parse`](crate::Prep::parse).
///
/// # Examples
///
/// ```
/// use xmpp_jid::split;
///
/// let parts = split("romeo@example.com/Home");
/// assert_eq!(parts.local, Some("romeo"));
/// assert_eq!(parts.domain, "example.com");
/// assert_eq!(parts.resource, Some("Home"));
///
/// // A leading separator is part of the domain.
/// assert_eq!(split("@example.com").domain, "@example.com");
/// ```
#[must_use]
pub fn split(raw: &str) -> Components<'_> {
    let (rest, resource) = split_at_separator(raw, RESOURCE_SEPARATOR);
    let (domain, local) = match split_at_separator(rest, LOCAL_SEPARATOR) {
        (local, Some(domain)) => (domain, Some(local)),
        (domain, None) => (domain, None),
    };

    Components {
        local,
        domain,
        resource,
        prepped: false,
    }
}

/// Splits at the first `separator` past position 0.
fn split_at_separator(input: &str, separator: char) -> (&str, Option<&str>) {
    match input.find(separator) {
        Some(idx) if idx > 0 => (&input[..idx], Some(&input[idx + separator.len_utf8()..])),
        _ => (input, None),
    }
}
