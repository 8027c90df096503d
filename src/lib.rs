//! Parsing, escaping, normalization and comparison of XMPP addresses.
//!
//! # Overview
//!
//! A JID has the structure:
//!
//! ```text
//! [ local "@" ] domain [ "/" resource ]
//! ```
//!
//! Raw addresses are split into their parts, prepared (normalized) into a
//! canonical form, and exposed as an immutable [`Jid`].
//!
//! # Quick Start
//!
//! ```rust
//! use xmpp_jid::{Jid, equal, equal_bare};
//!
//! let jid = Jid::parse("romeo@example.com/Home").unwrap();
//! assert_eq!(jid.local(), "romeo");
//! assert_eq!(jid.domain(), "example.com");
//! assert_eq!(jid.resource(), "Home");
//! assert_eq!(jid.bare(), "romeo@example.com");
//!
//! assert!(equal("Romeo@EXAMPLE.com/Home", &jid, None).unwrap());
//! assert!(equal_bare("romeo@example.com/Away", &jid, None).unwrap());
//! ```
//!
//! # Escaping
//!
//! Local parts cannot hold `@`, `/`, spaces and a few other characters.
//! [`create`] and [`JidBuilder`] escape them (XEP-0106); the unescaped forms
//! stay available:
//!
//! ```rust
//! use xmpp_jid::create;
//!
//! let jid = create("d'artagnan", "musketeers.lit", None).unwrap();
//! assert_eq!(jid.bare(), r"d\27artagnan@musketeers.lit");
//! assert_eq!(jid.unescaped_bare(), "d'artagnan@musketeers.lit");
//! ```
//!
//! # Normalization
//!
//! Normalization is delegated to a [`Normalizer`]. With the default
//! `stringprep` feature the nodeprep, resourceprep and nameprep profiles are
//! applied and may reject input. Without it, [`FallbackNormalizer`] only
//! lower-cases local parts and domains; ASCII addresses are still marked as
//! [`prepped`](Jid::prepped) because lower-casing is exact for them.
//!
//! | Part | Profile | Fallback |
//! |------|---------|----------|
//! | local | nodeprep | lower-case |
//! | domain | punycode decode + nameprep | punycode decode + lower-case |
//! | resource | resourceprep | unchanged |
//!
//! # Features
//!
//! - `stringprep` (default): full-fidelity normalization.
//! - `serde`: `Serialize`/`Deserialize` for [`Jid`] as its full address.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod compare;
mod constants;
mod error;
mod escape;
mod jid;
mod normalizer;
mod parsed;
pub mod prelude;
mod prep;
mod split;

pub use builder::{Empty, HasDomain, JidBuilder};
pub use compare::{create, equal, equal_bare, is_bare, is_full};
pub use constants::{
    ACE_PREFIX, ESCAPED_BACKSLASH, ESCAPES, ESCAPE_MARKER, LABEL_SEPARATOR, LABEL_SEPARATORS,
    LOCAL_SEPARATOR, RESOURCE_SEPARATOR,
};
pub use error::{JidError, JidErrorKind, NormalizeError, Part, Profile};
pub use escape::{escape, unescape};
pub use jid::{Jid, JidInput};
#[cfg(feature = "stringprep")]
pub use normalizer::StringprepNormalizer;
pub use normalizer::{FallbackNormalizer, Normalizer, available, detect};
pub use parsed::ParsedJid;
pub use prep::{Prep, parse, prep};
pub use split::{Components, split};
