//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use xmpp_jid::prelude::*;
//!
//! let jid = Jid::parse("juliet@capulet.lit/Balcony").unwrap();
//! assert!(is_full(&jid).unwrap());
//! ```
//!
//! Builder state markers (`Empty`, `HasDomain`) and constants are
//! intentionally excluded.

pub use crate::{
    // Core types
    Components, Jid, JidInput, ParsedJid, Prep,
    // Builder
    JidBuilder,
    // Normalization
    FallbackNormalizer, Normalizer,
    // Errors
    JidError, JidErrorKind, NormalizeError, Part, Profile,
    // Operations
    create, equal, equal_bare, escape, is_bare, is_full, parse, prep, split, unescape,
};
