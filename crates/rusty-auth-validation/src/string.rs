//! String validation functions

/// Whitespace as browsers see it: `\s` in a pattern and `String.prototype.trim`
///
/// Differs from Rust's Unicode `White_Space`: U+FEFF is included, U+0085 is not.
pub const FORM_WHITESPACE: &str = "\t\n\u{0B}\u{0C}\r \u{A0}\u{1680}\u{2000}\u{2001}\u{2002}\u{2003}\
\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

/// Regex class body matching [`FORM_WHITESPACE`]
pub(crate) const FORM_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub fn is_form_whitespace(c: char) -> bool {
    FORM_WHITESPACE.contains(c)
}

/// Required check: something other than whitespace was entered
pub fn is_present(value: &str) -> bool {
    value.chars().any(|c| !is_form_whitespace(c))
}
