use crate::extractor::decode::{char_code_array, decode_char_codes};
use crate::extractor::first_match;
use crate::extractor::patterns::{OUTBOUND_COMMENT, OUTBOUND_DOMAIN, OUTBOUND_LITERAL};

/// Shortest code array accepted as an encoded URL.
const MIN_ENCODED_URL_CODES: usize = 11;

/// The single subscription URL every call-to-action on the page points to.
pub fn resolve_outbound_url(source: &str) -> Option<String> {
    first_match(&[
        &|| outbound_from_char_codes(source),
        &|| outbound_from_comment(source),
        &|| outbound_from_literal(source),
        &|| outbound_from_domain_fragment(source),
    ])
}

/// Decodes the `chars = [..]` array behind `decodeUrl()`.
///
/// Short arrays and decodings without an `http` prefix are rejected; some pages
/// reuse the same variable name for unrelated data.
pub fn outbound_from_char_codes(source: &str) -> Option<String> {
    let codes = char_code_array(source)?;
    if codes.len() < MIN_ENCODED_URL_CODES {
        return None;
    }
    let decoded = decode_char_codes(&codes);
    decoded.starts_with("http").then_some(decoded)
}

pub fn outbound_from_comment(source: &str) -> Option<String> {
    let caps = OUTBOUND_COMMENT.captures(source)?;
    Some(caps.get(1)?.as_str().to_string())
}

pub fn outbound_from_literal(source: &str) -> Option<String> {
    OUTBOUND_LITERAL.find(source).map(|m| m.as_str().to_string())
}

pub fn outbound_from_domain_fragment(source: &str) -> Option<String> {
    OUTBOUND_DOMAIN
        .find(source)
        .map(|m| format!("https://{}", m.as_str()))
}
