//! Constants for JID parsing and escaping.

/// Separator between the local part and the domain.
pub const LOCAL_SEPARATOR: char = '@';

/// Separator between the bare address and the resource.
pub const RESOURCE_SEPARATOR: char = '/';

/// Separator between domain labels.
pub const LABEL_SEPARATOR: char = '.';

/// Every character that separates labels in an internationalized domain.
///
/// Full stop, ideographic full stop, fullwidth full stop and halfwidth
/// ideographic full stop.
pub const LABEL_SEPARATORS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Marker that introduces an escape sequence in a local part.
pub const ESCAPE_MARKER: char = '\\';

/// Escape sequence for the escape marker itself.
pub const ESCAPED_BACKSLASH: &str = "\\5c";

/// Raw characters encoded by escaping, paired with their escape sequence.
///
/// The order is the order in which sequences are applied. The backslash is
/// not in this table: a raw backslash is never encoded, only sequences that
/// already look like escapes are protected (see [`ESCAPED_BACKSLASH`]).
pub const ESCAPES: [(char, &str); 9] = [
    (' ', "\\20"),
    ('"', "\\22"),
    ('&', "\\26"),
    ('\'', "\\27"),
    ('/', "\\2f"),
    (':', "\\3a"),
    ('<', "\\3c"),
    ('>', "\\3e"),
    ('@', "\\40"),
];

/// ASCII-compatible encoding prefix of a punycode label.
pub const ACE_PREFIX: &str = "xn--";
