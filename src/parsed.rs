//! The record produced by the prep pipeline.

use crate::constants::{LOCAL_SEPARATOR, RESOURCE_SEPARATOR};

/// Prepared JID components together with their composed string forms.
///
/// `bare` and `full` (and their unescaped counterparts) are always derived
/// from the components by [`ParsedJid::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedJid {
    prepped: bool,
    local: Option<String>,
    domain: String,
    resource: Option<String>,
    bare: String,
    full: String,
    unescaped_local: Option<String>,
    unescaped_bare: String,
    unescaped_full: String,
}

impl ParsedJid {
    /// Composes a record from prepared components.
    ///
    /// Empty `local`, `unescaped_local` and `resource` values are treated as
    /// absent.
    #[must_use]
    pub fn new(
        local: Option<String>,
        unescaped_local: Option<String>,
        domain: String,
        resource: Option<String>,
        prepped: bool,
    ) -> Self {
        let local = local.filter(|s| !s.is_empty());
        let unescaped_local = unescaped_local.filter(|s| !s.is_empty());
        let resource = resource.filter(|s| !s.is_empty());

        let bare = compose_bare(local.as_deref(), &domain);
        let full = compose_full(&bare, resource.as_deref());
        let unescaped_bare = compose_bare(unescaped_local.as_deref(), &domain);
        let unescaped_full = compose_full(&unescaped_bare, resource.as_deref());

        Self {
            prepped,
            local,
            domain,
            resource,
            bare,
            full,
            unescaped_local,
            unescaped_bare,
            unescaped_full,
        }
    }

    /// Returns true if every component is known to be normalization-safe.
    #[must_use]
    pub const fn prepped(&self) -> bool {
        self.prepped
    }

    /// Returns the (escaped) local part.
    #[must_use]
    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// Returns the domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the resource.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// Returns `local@domain`, or `domain` without a local part.
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.bare
    }

    /// Returns `bare/resource`, or `bare` without a resource.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Returns the local part with escapes decoded.
    #[must_use]
    pub fn unescaped_local(&self) -> Option<&str> {
        self.unescaped_local.as_deref()
    }

    /// Returns the bare address with an unescaped local part.
    #[must_use]
    pub fn unescaped_bare(&self) -> &str {
        &self.unescaped_bare
    }

    /// Returns the full address with an unescaped local part.
    #[must_use]
    pub fn unescaped_full(&self) -> &str {
        &self.unescaped_full
    }

    /// Marks the record as prepped if `trusted` is set.
    ///
    /// A prepped record never becomes unprepped.
    #[must_use]
    pub(crate) fn trust(mut self, trusted: bool) -> Self {
        self.prepped = self.prepped || trusted;
        self
    }

    pub(crate) fn into_parts(self) -> ParsedParts {
        ParsedParts {
            prepped: self.prepped,
            local: self.local.unwrap_or_default(),
            domain: self.domain,
            resource: self.resource.unwrap_or_default(),
            bare: self.bare,
            full: self.full,
            unescaped_local: self.unescaped_local.unwrap_or_default(),
            unescaped_bare: self.unescaped_bare,
            unescaped_full: self.unescaped_full,
        }
    }
}

/// Owned fields of a [`ParsedJid`], with absent parts as empty strings.
pub(crate) struct ParsedParts {
    pub prepped: bool,
    pub local: String,
    pub domain: String,
    pub resource: String,
    pub bare: String,
    pub full: String,
    pub unescaped_local: String,
    pub unescaped_bare: String,
    pub unescaped_full: String,
}

fn compose_bare(local: Option<&str>, domain: &str) -> String {
    match local {
        Some(local) => format!("{local}{LOCAL_SEPARATOR}{domain}"),
        None => domain.to_string(),
    }
}

fn compose_full(bare: &str, resource: Option<&str>) -> String {
    match resource {
        Some(resource) => format!("{bare}{RESOURCE_SEPARATOR}{resource}"),
        None => bare.to_string(),
    }
}
