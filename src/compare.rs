//! Equality and classification over anything that converts into a JID.
//!
//! Inputs are coerced with the process-wide normalizer, so comparing two raw
//! strings prepares both first.

use crate::error::JidError;
use crate::jid::{Jid, JidInput};
use crate::prep::Prep;

/// Compares local part, domain and resource of two JIDs.
///
/// `require_prep` defaults to `true`: both sides must then also be prepped.
///
/// # Errors
///
/// Returns [`JidError`] if either input cannot be turned into a JID.
///
/// # Examples
///
/// ```
/// use xmpp_jid::equal;
///
/// assert!(equal("Romeo@Example.com/Home", "romeo@example.com/Home", None).unwrap());
/// assert!(!equal("romeo@example.com/Home", "romeo@example.com/Away", None).unwrap());
/// assert!(equal("a@b/r", "a@b/r", Some(false)).unwrap());
/// ```
pub fn equal<'a, 'b>(
    a: impl Into<JidInput<'a>>,
    b: impl Into<JidInput<'b>>,
    require_prep: Option<bool>,
) -> Result<bool, JidError> {
    let prep = Prep::detected();
    let a = prep.resolve(a.into())?;
    let b = prep.resolve(b.into())?;
    Ok(a.equals(&b, require_prep.unwrap_or(true)))
}

/// Compares local part and domain of two JIDs, ignoring resources.
///
/// `require_prep` defaults to `true`: both sides must then also be prepped.
///
/// # Errors
///
/// Returns [`JidError`] if either input cannot be turned into a JID.
///
/// # Examples
///
/// ```
/// use xmpp_jid::equal_bare;
///
/// assert!(equal_bare("a@b/r1", "a@b/r2", None).unwrap());
/// ```
pub fn equal_bare<'a, 'b>(
    a: impl Into<JidInput<'a>>,
    b: impl Into<JidInput<'b>>,
    require_prep: Option<bool>,
) -> Result<bool, JidError> {
    let prep = Prep::detected();
    let a = prep.resolve(a.into())?;
    let b = prep.resolve(b.into())?;
    Ok(a.equals_bare(&b, require_prep.unwrap_or(true)))
}

/// Returns true if the JID has no resource.
///
/// # Errors
///
/// Returns [`JidError`] if the input cannot be turned into a JID.
pub fn is_bare<'a>(jid: impl Into<JidInput<'a>>) -> Result<bool, JidError> {
    Ok(Prep::detected().resolve(jid.into())?.is_bare())
}

/// Returns true if the JID has a resource.
///
/// # Errors
///
/// Returns [`JidError`] if the input cannot be turned into a JID.
pub fn is_full<'a>(jid: impl Into<JidInput<'a>>) -> Result<bool, JidError> {
    Ok(Prep::detected().resolve(jid.into())?.is_full())
}

/// Builds a JID from an unescaped local part, a domain and an optional
/// resource, using the process-wide normalizer.
///
/// # Errors
///
/// See [`Prep::create`].
///
/// # Examples
///
/// ```
/// use xmpp_jid::create;
///
/// let jid = create("call me ishmael", "example.com", Some("Ship")).unwrap();
/// assert_eq!(jid.full(), r"call\20me\20ishmael@example.com/Ship");
/// assert_eq!(jid.unescaped_bare(), "call me ishmael@example.com");
/// ```
pub fn create(local: &str, domain: &str, resource: Option<&str>) -> Result<Jid, JidError> {
    Prep::detected().create(local, domain, resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JidErrorKind;

    #[test]
    fn equal_same_address() {
        assert!(equal("a@b/c", "a@b/c", None).unwrap());
    }

    #[test]
    fn equal_differs_on_resource() {
        assert!(!equal("a@b/c", "a@b/d", None).unwrap());
        assert!(!equal("a@b/c", "a@b", None).unwrap());
    }

    #[test]
    fn equal_normalizes_both_sides() {
        assert!(equal("A@B.example/c", "a@b.example./c", None).unwrap());
    }

    #[test]
    fn resource_case_matters() {
        assert!(!equal("a@b/Home", "a@b/home", None).unwrap());
    }

    #[test]
    fn equal_requires_prep_by_default() {
        // The empty JID is never prepped.
        assert!(!equal("", "", None).unwrap());
        assert!(!equal("", "", Some(true)).unwrap());
        assert!(equal("", "", Some(false)).unwrap());
    }

    #[test]
    fn equal_accepts_mixed_inputs() {
        let jid = Jid::parse("a@b/c").unwrap();
        assert!(equal(&jid, "a@b/c", None).unwrap());
        assert!(equal(("a", "b", "c"), &jid, None).unwrap());
    }

    #[test]
    fn equal_bare_ignores_resource() {
        assert!(equal_bare("a@b/r1", "a@b/r2", None).unwrap());
        assert!(equal_bare("a@b/r1", "a@b", None).unwrap());
        assert!(!equal_bare("a@b/r1", "c@b/r1", None).unwrap());
    }

    #[test]
    fn classification() {
        assert!(is_bare("a@b").unwrap());
        assert!(!is_full("a@b").unwrap());
        assert!(is_full("a@b/c").unwrap());
        assert!(!is_bare("a@b/c").unwrap());
        assert!(is_bare("example.com").unwrap());
    }

    #[test]
    fn invalid_components_propagate() {
        let err = equal(("a", "", "c"), "a@b/c", Some(false)).unwrap_err();
        assert!(matches!(err.kind, JidErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn create_round_trips_through_string() {
        let jid = create("d'artagnan", "musketeers.lit", Some("Sword")).unwrap();
        let reparsed = Jid::parse(jid.full()).unwrap();
        assert_eq!(reparsed.full(), jid.full());
        assert!(jid.equals(&reparsed, true));
    }
}
