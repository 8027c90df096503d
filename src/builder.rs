//! Typestate builder for constructing [`Jid`] instances from parts.
//!
//! The domain is the only required part, so `build()` is only available
//! once it has been set.

use std::marker::PhantomData;

use crate::error::JidError;
use crate::jid::Jid;
use crate::prep::Prep;

/// Marker: No domain set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: The domain has been set, ready to build.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasDomain;

/// A typestate builder for [`Jid`].
///
/// The local part is given unescaped and is escaped on `build()`, like
/// [`create`](crate::create).
///
/// # Examples
///
/// ```
/// use xmpp_jid::JidBuilder;
///
/// let jid = JidBuilder::new()
///     .local("juliet")
///     .domain("capulet.lit")
///     .resource("Balcony")
///     .build()
///     .unwrap();
///
/// assert_eq!(jid.full(), "juliet@capulet.lit/Balcony");
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use xmpp_jid::JidBuilder;
///
/// // Error: cannot build without a domain
/// let jid = JidBuilder::new().local("juliet").build();
/// ```
#[derive(Debug, Clone)]
pub struct JidBuilder<State = Empty> {
    local: Option<String>,
    domain: String,
    resource: Option<String>,
    _state: PhantomData<State>,
}

impl JidBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            local: None,
            domain: String::new(),
            resource: None,
            _state: PhantomData,
        }
    }

    /// Sets the domain and advances to the [`HasDomain`] state.
    #[must_use]
    pub fn domain(self, domain: impl Into<String>) -> JidBuilder<HasDomain> {
        JidBuilder {
            local: self.local,
            domain: domain.into(),
            resource: self.resource,
            _state: PhantomData,
        }
    }
}

impl Default for JidBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl JidBuilder<HasDomain> {
    /// Builds the JID with the process-wide normalizer.
    ///
    /// # Errors
    ///
    /// Returns [`JidError`] if the domain is empty while a local part or
    /// resource is set, or a part is rejected by the normalizer.
    pub fn build(self) -> Result<Jid, JidError> {
        self.build_with(&Prep::detected())
    }

    /// Builds the JID with the given pipeline.
    ///
    /// # Errors
    ///
    /// See [`JidBuilder::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_jid::{JidBuilder, Prep};
    ///
    /// let jid = JidBuilder::new()
    ///     .domain("EXAMPLE.com")
    ///     .build_with(&Prep::fallback())
    ///     .unwrap();
    ///
    /// assert_eq!(jid.domain(), "example.com");
    /// ```
    pub fn build_with(self, prep: &Prep<'_>) -> Result<Jid, JidError> {
        prep.create(
            self.local.as_deref().unwrap_or_default(),
            &self.domain,
            self.resource.as_deref(),
        )
    }
}

/// Methods available in every state for optional parts.
impl<State> JidBuilder<State> {
    /// Sets the unescaped local part.
    ///
    /// If called multiple times, the last value wins.
    #[must_use]
    pub fn local(mut self, local: impl Into<String>) -> Self {
        self.local = Some(local.into());
        self
    }

    /// Sets the resource.
    ///
    /// If called multiple times, the last value wins.
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Sets the local part if provided, otherwise leaves it unchanged.
    #[must_use]
    pub fn maybe_local(self, local: Option<&str>) -> Self {
        match local {
            Some(l) => self.local(l),
            None => self,
        }
    }

    /// Sets the resource if provided, otherwise leaves it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use xmpp_jid::JidBuilder;
    ///
    /// let resource: Option<&str> = None;
    /// let jid = JidBuilder::new()
    ///     .domain("example.com")
    ///     .maybe_resource(resource)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(jid.is_bare());
    /// ```
    #[must_use]
    pub fn maybe_resource(self, resource: Option<&str>) -> Self {
        match resource {
            Some(r) => self.resource(r),
            None => self,
        }
    }
}
