//! Reversible escaping of local parts (XEP-0106).
//!
//! Escaping replaces characters that cannot appear in a local part with a
//! backslash followed by two lower-case hex digits:
//!
//! | char | escape |
//! |------|--------|
//! | space | `\20` |
//! | `"` | `\22` |
//! | `&` | `\26` |
//! | `'` | `\27` |
//! | `/` | `\2f` |
//! | `:` | `\3a` |
//! | `<` | `\3c` |
//! | `>` | `\3e` |
//! | `@` | `\40` |
//! | `\` | `\5c` |
//!
//! Text that already looks like an escape sequence is protected by escaping
//! its backslash, so [`unescape`] restores it verbatim.

use crate::constants::{ESCAPED_BACKSLASH, ESCAPES, ESCAPE_MARKER};

/// Escapes a local part.
///
/// Leading and trailing whitespace is trimmed first. Existing escape
/// sequences are then protected, and finally every reserved character is
/// encoded.
///
/// # Examples
///
/// ```
/// use xmpp_jid::escape;
///
/// assert_eq!(escape("node with spaces@host"), r"node\20with\20spaces\40host");
/// assert_eq!(escape(r"c:\5commas"), r"c\3a\5c5commas");
/// ```
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = input.trim().replace(ESCAPED_BACKSLASH, "\\5c5c");

    for (_, sequence) in ESCAPES {
        if out.contains(sequence) {
            out = out.replace(sequence, &protect(sequence));
        }
    }

    for (raw, sequence) in ESCAPES {
        if out.contains(raw) {
            out = out.replace(raw, sequence);
        }
    }

    out
}

/// Reverses [`escape`].
///
/// `\5c` is decoded after every other sequence, so a backslash produced by
/// decoding is never read as the start of another escape.
///
/// # Examples
///
/// ```
/// use xmpp_jid::unescape;
///
/// assert_eq!(unescape(r"d\27artagnan"), "d'artagnan");
/// assert_eq!(unescape(r"c\3a\5c5commas"), r"c:\5commas");
/// ```
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut out = input.to_string();

    for (raw, sequence) in ESCAPES {
        if out.contains(sequence) {
            out = out.replace(sequence, raw.encode_utf8(&mut [0; 4]));
        }
    }

    out.replace(ESCAPED_BACKSLASH, "\\")
}

/// `\xx` becomes `\5cxx`.
fn protect(sequence: &str) -> String {
    let code = sequence.trim_start_matches(ESCAPE_MARKER);
    format!("{ESCAPED_BACKSLASH}{code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_reserved_characters() {
        assert_eq!(escape("space cadet"), r"space\20cadet");
        assert_eq!(escape("call me \"ishmael\""), r"call\20me\20\22ishmael\22");
        assert_eq!(escape("at&t guy"), r"at\26t\20guy");
        assert_eq!(escape("d'artagnan"), r"d\27artagnan");
        assert_eq!(escape("/.fanboy"), r"\2f.fanboy");
        assert_eq!(escape("::foo::"), r"\3a\3afoo\3a\3a");
        assert_eq!(escape("<foo>"), r"\3cfoo\3e");
        assert_eq!(escape("user@host"), r"user\40host");
    }

    #[test]
    fn escape_protects_existing_sequences() {
        assert_eq!(escape(r"c:\net"), r"c\3a\net");
        assert_eq!(escape(r"c:\\net"), r"c\3a\\net");
        assert_eq!(escape(r"c:\cool stuff"), r"c\3a\cool\20stuff");
        assert_eq!(escape(r"c:\5commas"), r"c\3a\5c5commas");
        assert_eq!(escape(r"foo\20bar"), r"foo\5c20bar");
    }

    #[test]
    fn escape_trims_whitespace() {
        assert_eq!(escape("  padded  "), "padded");
        assert_eq!(escape("\t inner space \n"), r"inner\20space");
    }

    #[test]
    fn escape_leaves_raw_backslash_alone() {
        assert_eq!(escape(r"a\b"), r"a\b");
    }

    #[test]
    fn escape_is_case_sensitive_on_hex() {
        assert_eq!(escape(r"a\2Fb"), r"a\2Fb");
    }

    #[test]
    fn unescape_reserved_sequences() {
        assert_eq!(unescape(r"space\20cadet"), "space cadet");
        assert_eq!(unescape(r"call\20me\20\22ishmael\22"), "call me \"ishmael\"");
        assert_eq!(unescape(r"at\26t\20guy"), "at&t guy");
        assert_eq!(unescape(r"\2f.fanboy"), "/.fanboy");
        assert_eq!(unescape(r"\3cfoo\3e"), "<foo>");
        assert_eq!(unescape(r"user\40host"), "user@host");
    }

    #[test]
    fn unescape_decodes_backslash_last() {
        assert_eq!(unescape(r"c\3a\5c5commas"), r"c:\5commas");
        assert_eq!(unescape(r"foo\5c20bar"), r"foo\20bar");
    }

    #[test]
    fn round_trip_reserved_text() {
        for s in [
            "node with spaces@host",
            r"c:\5commas",
            "\"quoted\" & 'single'",
            r"already\20escaped",
            "plain",
            "",
        ] {
            assert_eq!(unescape(&escape(s)), s, "round trip of {s:?}");
        }
    }

    #[test]
    fn escape_without_raw_reserved_characters_is_stable_through_unescape() {
        let escaped = escape("a b");
        assert_eq!(escape(&unescape(&escaped)), escaped);
    }
}
