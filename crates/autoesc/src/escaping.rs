//! Re-escapers (C7): applied to text that was entity-decoded for recursive
//! scanning inside an attribute value, then needs to go back into the same
//! quoting context it came from.

/// Escapes `s` for placement inside a double-quoted HTML attribute value.
pub fn escape_html_dq_only(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Escapes `s` for placement inside a single-quoted HTML attribute value.
pub fn escape_html_sq_only(s: &str) -> String {
    html_escape::encode_single_quoted_attribute(s).into_owned()
}
