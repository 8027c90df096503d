//! The JID value type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::JidError;
use crate::parsed::ParsedJid;
use crate::prep::Prep;

/// An immutable, prepared XMPP address.
///
/// Absent parts are empty strings. Two JIDs are compared on their prepared
/// components; see [`Jid::equals`] for the comparison that also takes
/// `prepped` into account.
///
/// # Examples
///
/// ```
/// use xmpp_jid::Jid;
///
/// let jid = Jid::parse("romeo@example.com/Home").unwrap();
/// assert_eq!(jid.local(), "romeo");
/// assert_eq!(jid.domain(), "example.com");
/// assert_eq!(jid.resource(), "Home");
/// assert_eq!(jid.bare(), "romeo@example.com");
/// assert_eq!(jid.to_string(), "romeo@example.com/Home");
/// assert!(jid.is_full());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Jid {
    local: String,
    domain: String,
    resource: String,
    bare: String,
    full: String,
    unescaped_local: String,
    unescaped_bare: String,
    unescaped_full: String,
    prepped: bool,
}

/// Anything a [`Jid`] can be constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JidInput<'a> {
    /// A raw address such as `user@example.com/res`
    Raw(&'a str),
    /// An existing JID, copied as is
    Jid(&'a Jid),
    /// Separate parts; the local part is given unescaped
    Components {
        /// The unescaped local part
        local: Option<&'a str>,
        /// The domain
        domain: &'a str,
        /// The resource
        resource: Option<&'a str>,
    },
}

impl<'a> From<&'a str> for JidInput<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<&'a String> for JidInput<'a> {
    fn from(raw: &'a String) -> Self {
        Self::Raw(raw)
    }
}

impl<'a> From<&'a Jid> for JidInput<'a> {
    fn from(jid: &'a Jid) -> Self {
        Self::Jid(jid)
    }
}

impl<'a> From<(&'a str, &'a str)> for JidInput<'a> {
    fn from((local, domain): (&'a str, &'a str)) -> Self {
        Self::Components {
            local: Some(local),
            domain,
            resource: None,
        }
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for JidInput<'a> {
    fn from((local, domain, resource): (&'a str, &'a str, &'a str)) -> Self {
        Self::Components {
            local: Some(local),
            domain,
            resource: Some(resource),
        }
    }
}

impl Jid {
    /// Constructs a JID with the process-wide normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] if a component is rejected by the normalizer, or
    /// components are given without a domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_jid::Jid;
    ///
    /// let a = Jid::new("juliet@example.com").unwrap();
    /// let b = Jid::new(("juliet", "example.com")).unwrap();
    /// let c = Jid::new(&a).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    /// ```
    pub fn new<'a>(input: impl Into<JidInput<'a>>) -> Result<Self, JidError> {
        Prep::detected().jid(input)
    }

    /// Parses a raw address.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] if a component is rejected by the normalizer.
    pub fn parse(raw: &str) -> Result<Self, JidError> {
        Self::new(JidInput::Raw(raw))
    }

    /// Builds a JID from an unescaped local part, a domain and a resource.
    ///
    /// # Errors
    ///
    /// See [`Prep::create`].
    pub fn from_parts(
        local: &str,
        domain: &str,
        resource: Option<&str>,
    ) -> Result<Self, JidError> {
        Prep::detected().create(local, domain, resource)
    }

    /// Returns the escaped local part.
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the resource.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the bare address.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.bare
    }

    /// Returns the full address.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Returns the local part with escapes decoded.
    #[must_use]
    pub fn unescaped_local(&self) -> &str {
        &self.unescaped_local
    }

    /// Returns the bare address with the local part unescaped.
    #[must_use]
    pub fn unescaped_bare(&self) -> &str {
        &self.unescaped_bare
    }

    /// Returns the full address with the local part unescaped.
    #[must_use]
    pub fn unescaped_full(&self) -> &str {
        &self.unescaped_full
    }

    /// Returns true if every component is known to be normalization-safe.
    #[must_use]
    pub const fn prepped(&self) -> bool {
        self.prepped
    }

    /// Returns the full address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Returns true if there is no resource.
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.resource.is_empty()
    }

    /// Returns true if there is a resource.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.is_bare()
    }

    /// Returns a copy of this JID without the resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_jid::Jid;
    ///
    /// let jid = Jid::parse("romeo@example.com/Home").unwrap();
    /// assert_eq!(jid.to_bare().full(), "romeo@example.com");
    /// ```
    #[must_use]
    pub fn to_bare(&self) -> Self {
        Self {
            resource: String::new(),
            full: self.bare.clone(),
            unescaped_full: self.unescaped_bare.clone(),
            ..self.clone()
        }
    }

    /// Compares local part, domain and resource.
    ///
    /// With `require_prep`, both JIDs must also be prepped.
    #[must_use]
    pub fn equals(&self, other: &Self, require_prep: bool) -> bool {
        self.equals_bare(other, require_prep) && self.resource == other.resource
    }

    /// Compares local part and domain, ignoring the resource.
    ///
    /// With `require_prep`, both JIDs must also be prepped.
    #[must_use]
    pub fn equals_bare(&self, other: &Self, require_prep: bool) -> bool {
        self.local == other.local
            && self.domain == other.domain
            && (!require_prep || (self.prepped && other.prepped))
    }
}

impl From<ParsedJid> for Jid {
    fn from(parsed: ParsedJid) -> Self {
        let parts = parsed.into_parts();
        Self {
            local: parts.local,
            domain: parts.domain,
            resource: parts.resource,
            bare: parts.bare,
            full: parts.full,
            unescaped_local: parts.unescaped_local,
            unescaped_bare: parts.unescaped_bare,
            unescaped_full: parts.unescaped_full,
            prepped: parts.prepped,
        }
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full)
    }
}

impl FromStr for Jid {
    type Err = JidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Jid {
    fn as_ref(&self) -> &str {
        &self.full
    }
}

impl TryFrom<&str> for Jid {
    type Error = JidError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Jid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Jid {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.full, &self.local, &self.domain, &self.resource, self.prepped).cmp(&(
            &other.full,
            &other.local,
            &other.domain,
            &other.resource,
            other.prepped,
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Jid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.full)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Jid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(JidVisitor)
    }
}

#[cfg(feature = "serde")]
struct JidVisitor;

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct JidParts {
    #[serde(default)]
    local: Option<String>,
    #[serde(default)]
    domain: String,
    #[serde(default)]
    resource: Option<String>,
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for JidVisitor {
    type Value = Jid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JID string or a map of local, domain and resource")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Jid::parse(v).map_err(E::custom)
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use serde::de::Error as _;

        let parts = <JidParts as serde::Deserialize>::deserialize(
            serde::de::value::MapAccessDeserializer::new(map),
        )?;
        Jid::new(JidInput::Components {
            local: parts.local.as_deref(),
            domain: &parts.domain,
            resource: parts.resource.as_deref(),
        })
        .map_err(A::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback(input: &str) -> Jid {
        Prep::fallback().jid(input).unwrap()
    }

    #[test]
    fn parse_populates_every_field() {
        let jid = fallback(r"d\27artagnan@musketeers.lit/Sword");
        assert_eq!(jid.local(), r"d\27artagnan");
        assert_eq!(jid.domain(), "musketeers.lit");
        assert_eq!(jid.resource(), "Sword");
        assert_eq!(jid.bare(), r"d\27artagnan@musketeers.lit");
        assert_eq!(jid.full(), r"d\27artagnan@musketeers.lit/Sword");
        assert_eq!(jid.unescaped_local(), "d'artagnan");
        assert_eq!(jid.unescaped_bare(), "d'artagnan@musketeers.lit");
        assert_eq!(jid.unescaped_full(), "d'artagnan@musketeers.lit/Sword");
        assert!(jid.prepped());
    }

    #[test]
    fn absent_parts_are_empty() {
        let jid = fallback("example.com");
        assert_eq!(jid.local(), "");
        assert_eq!(jid.resource(), "");
        assert_eq!(jid.unescaped_local(), "");
        assert_eq!(jid.bare(), "example.com");
    }

    #[test]
    fn display_is_full() {
        let jid = fallback("a@b/c");
        assert_eq!(jid.to_string(), "a@b/c");
        assert_eq!(jid.as_str(), "a@b/c");
        assert_eq!(jid.as_ref(), "a@b/c");
    }

    #[test]
    fn classification() {
        assert!(fallback("a@b").is_bare());
        assert!(!fallback("a@b").is_full());
        assert!(fallback("a@b/c").is_full());
        assert!(!fallback("a@b/c").is_bare());
        assert!(fallback("a@b/").is_bare());
    }

    #[test]
    fn to_bare_drops_resource() {
        let jid = fallback("a@b/c");
        let bare = jid.to_bare();
        assert_eq!(bare.full(), "a@b");
        assert_eq!(bare.unescaped_full(), "a@b");
        assert!(bare.is_bare());
        assert_eq!(bare, fallback("a@b"));
    }

    #[test]
    fn equals_checks_prep_on_request() {
        let prep = Prep::fallback();
        let trusted = prep.jid("a@b/r").unwrap();
        let components = crate::Components::new("b")
            .with_local("a")
            .with_resource("r");
        let untrusted = Jid::from(prep.prep(components).unwrap());

        assert!(!untrusted.prepped());
        assert!(trusted.equals(&untrusted, false));
        assert!(!trusted.equals(&untrusted, true));
        assert!(trusted.equals(&trusted, true));
    }

    #[test]
    fn equals_bare_ignores_resource() {
        let a = fallback("a@b/r1");
        let b = fallback("a@b/r2");
        assert!(a.equals_bare(&b, true));
        assert!(!a.equals(&b, true));
    }

    #[test]
    fn ordering_follows_full_address() {
        let mut jids = vec![fallback("c@d"), fallback("a@b/z"), fallback("a@b")];
        jids.sort();
        let sorted: Vec<_> = jids.iter().map(Jid::as_str).collect();
        assert_eq!(sorted, ["a@b", "a@b/z", "c@d"]);
    }

    #[test]
    fn input_conversions() {
        let owned = String::from("a@b");
        assert_eq!(JidInput::from(&owned), JidInput::Raw("a@b"));
        assert_eq!(
            JidInput::from(("a", "b", "c")),
            JidInput::Components {
                local: Some("a"),
                domain: "b",
                resource: Some("c"),
            }
        );
    }

    #[test]
    fn from_str_and_try_from() {
        let a: Jid = "a@b/c".parse().unwrap();
        let b = Jid::try_from("a@b/c").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_parts_escapes_local() {
        let jid = Jid::from_parts("d'artagnan", "musketeers.lit", None).unwrap();
        assert_eq!(jid.local(), r"d\27artagnan");
        assert_eq!(jid.unescaped_local(), "d'artagnan");
    }
}
