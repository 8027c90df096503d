//! The prep pipeline: escaping plus normalization into a [`ParsedJid`].
//!
//! # Order of operations
//!
//! 1. The local part goes through nodeprep; the *prepared* local part is then
//!    unescaped to produce the unescaped forms.
//! 2. The resource goes through resourceprep.
//! 3. A trailing `.` is stripped from the domain, each label is decoded from
//!    punycode, and the rejoined domain goes through nameprep.
//! 4. Bare and full forms are composed.
//! 5. The result is prepped if the caller said so or the normalizer is the
//!    full-fidelity one.

use std::borrow::Cow;

use crate::constants::LABEL_SEPARATOR;
use crate::error::{JidError, Part};
use crate::escape::{escape, unescape};
use crate::jid::{Jid, JidInput};
use crate::normalizer::{FallbackNormalizer, Normalizer, detect};
use crate::parsed::ParsedJid;
use crate::split::{Components, split};

/// A prep pipeline bound to one [`Normalizer`].
///
/// The crate-level functions use [`Prep::detected`]. Build a `Prep` directly
/// to pin a strategy, e.g. for reproducible output across builds.
///
/// # Examples
///
/// ```
/// use xmpp_jid::Prep;
///
/// let prep = Prep::fallback();
/// let parsed = prep.parse("Romeo@Example.com/Home", false).unwrap();
/// assert_eq!(parsed.full(), "romeo@example.com/Home");
/// assert!(parsed.prepped()); // ASCII input is trusted
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Prep<'n> {
    normalizer: &'n dyn Normalizer,
}

impl Prep<'static> {
    /// Creates a pipeline using the process-wide normalizer.
    #[must_use]
    pub fn detected() -> Self {
        Self::new(detect())
    }

    /// Creates a pipeline using [`FallbackNormalizer`].
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(&FallbackNormalizer)
    }
}

impl Default for Prep<'static> {
    fn default() -> Self {
        Self::detected()
    }
}

impl<'n> Prep<'n> {
    /// Creates a pipeline using the given normalizer.
    #[must_use]
    pub const fn new(normalizer: &'n dyn Normalizer) -> Self {
        Self { normalizer }
    }

    /// Returns the normalizer.
    #[must_use]
    pub const fn normalizer(&self) -> &'n dyn Normalizer {
        self.normalizer
    }

    /// Returns true if the normalizer is the full-fidelity one.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.normalizer.is_available()
    }

    /// Normalizes components into a [`ParsedJid`].
    ///
    /// # Errors
    ///
    /// Returns the normalizer's error, tagged with the failing component.
    pub fn prep(&self, components: Components<'_>) -> Result<ParsedJid, JidError> {
        log::trace!("prep {components:?} with {:?}", self.normalizer);

        let (local, unescaped_local) = match non_empty(components.local) {
            Some(local) => {
                let prepped = self
                    .normalizer
                    .nodeprep(local)
                    .map_err(|e| JidError::normalization(local, Part::Local, e))?;
                let unescaped = unescape(&prepped);
                (Some(prepped.into_owned()), Some(unescaped))
            }
            None => (None, None),
        };

        let resource = non_empty(components.resource)
            .map(|resource| {
                self.normalizer
                    .resourceprep(resource)
                    .map(Cow::into_owned)
                    .map_err(|e| JidError::normalization(resource, Part::Resource, e))
            })
            .transpose()?;

        let domain = self.prep_domain(components.domain)?;
        let prepped = components.prepped || self.normalizer.is_available();

        Ok(ParsedJid::new(local, unescaped_local, domain, resource, prepped))
    }

    /// Splits and normalizes a raw address.
    ///
    /// The result is prepped if the pipeline marks it so, `trusted` is set,
    /// or `raw` is entirely ASCII.
    ///
    /// # Errors
    ///
    /// Returns the normalizer's error, tagged with the failing component.
    pub fn parse(&self, raw: &str, trusted: bool) -> Result<ParsedJid, JidError> {
        let trusted = trusted || raw.is_ascii();
        let parsed = self.prep(split(raw))?;
        Ok(parsed.trust(trusted))
    }

    /// Builds a JID from an unescaped local part, a domain and a resource.
    ///
    /// The local part is escaped first. The result is trusted if every given
    /// part is ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`JidErrorKind::InvalidArgument`](crate::JidErrorKind::InvalidArgument)
    /// if `domain` is empty while `local` or `resource` is not, or the
    /// normalizer's error.
    pub fn create(
        &self,
        local: &str,
        domain: &str,
        resource: Option<&str>,
    ) -> Result<Jid, JidError> {
        self.jid(JidInput::Components {
            local: Some(local),
            domain,
            resource,
        })
    }

    /// Constructs a JID from any supported input.
    ///
    /// An empty raw string, or components that are all empty, produce the
    /// empty JID.
    ///
    /// # Errors
    ///
    /// See [`Prep::parse`] and [`Prep::create`].
    pub fn jid<'a>(&self, input: impl Into<JidInput<'a>>) -> Result<Jid, JidError> {
        self.resolve(input.into()).map(Cow::into_owned)
    }

    /// Like [`Prep::jid`], but borrows an existing JID instead of copying it.
    pub(crate) fn resolve<'a>(&self, input: JidInput<'a>) -> Result<Cow<'a, Jid>, JidError> {
        match input {
            JidInput::Raw("") => Ok(Cow::Owned(Jid::default())),
            JidInput::Raw(raw) => self.parse(raw, false).map(|p| Cow::Owned(p.into())),
            JidInput::Jid(jid) => Ok(Cow::Borrowed(jid)),
            JidInput::Components {
                local,
                domain,
                resource,
            } => self
                .assemble(local.unwrap_or_default(), domain, non_empty(resource))
                .map(Cow::Owned),
        }
    }

    fn assemble(
        &self,
        local: &str,
        domain: &str,
        resource: Option<&str>,
    ) -> Result<Jid, JidError> {
        if domain.is_empty() {
            return match (local.is_empty(), resource) {
                (true, None) => Ok(Jid::default()),
                (false, _) => Err(JidError::invalid_argument(
                    local,
                    "a domain is required when a local part is given",
                )),
                (true, Some(resource)) => Err(JidError::invalid_argument(
                    resource,
                    "a domain is required when a resource is given",
                )),
            };
        }

        let trusted =
            local.is_ascii() && domain.is_ascii() && resource.is_none_or(str::is_ascii);
        let escaped = escape(local);
        let components = Components {
            local: Some(&escaped),
            domain,
            resource,
            prepped: trusted,
        };

        self.prep(components).map(Jid::from)
    }

    fn prep_domain(&self, domain: &str) -> Result<String, JidError> {
        let stripped = domain.strip_suffix(LABEL_SEPARATOR).unwrap_or(domain);

        let labels = stripped
            .split(LABEL_SEPARATOR)
            .map(|label| self.normalizer.to_unicode(label))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| JidError::normalization(domain, Part::Domain, e))?;
        let decoded = labels.join(".");

        self.normalizer
            .nameprep(&decoded)
            .map(Cow::into_owned)
            .map_err(|e| JidError::normalization(domain, Part::Domain, e))
    }
}

/// Normalizes components with the process-wide normalizer.
///
/// # Errors
///
/// Returns the normalizer's error, tagged with the failing component.
///
/// # Examples
///
/// ```
/// use xmpp_jid::{prep, Components};
///
/// let parsed = prep(Components::new("example.com.").with_local("juliet")).unwrap();
/// assert_eq!(parsed.bare(), "juliet@example.com");
/// ```
pub fn prep(components: Components<'_>) -> Result<ParsedJid, JidError> {
    Prep::detected().prep(components)
}

/// Splits and normalizes a raw address with the process-wide normalizer.
///
/// # Errors
///
/// Returns the normalizer's error, tagged with the failing component.
///
/// # Examples
///
/// ```
/// use xmpp_jid::parse;
///
/// let parsed = parse("romeo@example.com/Home", false).unwrap();
/// assert_eq!(parsed.local(), Some("romeo"));
/// assert_eq!(parsed.domain(), "example.com");
/// assert_eq!(parsed.resource(), Some("Home"));
/// assert_eq!(parsed.bare(), "romeo@example.com");
/// assert_eq!(parsed.full(), "romeo@example.com/Home");
/// ```
pub fn parse(raw: &str, trusted: bool) -> Result<ParsedJid, JidError> {
    Prep::detected().parse(raw, trusted)
}

fn non_empty(part: Option<&str>) -> Option<&str> {
    part.filter(|s| !s.is_empty())
}
