use crate::extractor::patterns::{
    CHARS_ARRAY, CONST_CHARS_ARRAY, FROM_CHAR_CODE_CALL, GET_TEXT_CALL,
};

/// Turns a list of character codes back into the literal it encodes.
///
/// Codes that are not valid Unicode scalar values are skipped; the input is
/// untrusted legacy source, so a stray surrogate must not abort decoding.
pub fn decode_char_codes(codes: &[u32]) -> String {
    codes.iter().filter_map(|&c| char::from_u32(c)).collect()
}

/// Parses a comma separated list of integers, dropping anything non-numeric.
pub fn parse_code_list(list: &str) -> Vec<u32> {
    list.split(',')
        .filter_map(|token| token.trim().parse::<u32>().ok())
        .collect()
}

/// Finds a `chars = [..]` declaration and returns its codes.
///
/// The `const` form is preferred; a bare assignment is accepted as fallback.
pub fn char_code_array(source: &str) -> Option<Vec<u32>> {
    [&*CONST_CHARS_ARRAY, &*CHARS_ARRAY]
        .into_iter()
        .find_map(|pattern| {
            let caps = pattern.captures(source)?;
            let codes = parse_code_list(caps.get(1)?.as_str());
            (!codes.is_empty()).then_some(codes)
        })
}

/// Decodes text that consists solely of a `{getText([..])}` expression.
pub fn get_text_call(text: &str) -> Option<String> {
    let caps = GET_TEXT_CALL.captures(text)?;
    let codes = parse_code_list(caps.get(1)?.as_str());
    let decoded = decode_char_codes(&codes);
    (!decoded.trim().is_empty()).then_some(decoded)
}

/// Decodes the argument list of the first `String.fromCharCode(..)` call.
pub fn from_char_code_call(source: &str) -> Option<String> {
    let caps = FROM_CHAR_CODE_CALL.captures(source)?;
    let codes = parse_code_list(caps.get(1)?.as_str());
    if codes.is_empty() {
        return None;
    }
    Some(decode_char_codes(&codes))
}
