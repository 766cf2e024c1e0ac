use regex::Regex;

use crate::extractor::decode::get_text_call;
use crate::extractor::model::capitalize;
use crate::extractor::patterns::{
    BIO_BRAND_COLOR, BIO_NGL_MARKER, BIO_SMALL_TEXT, BIO_SUBTITLE_LITERAL, HEADING,
};

/// Display name from the first `<h1>`, falling back to the capitalized slug.
pub fn resolve_title(source: &str, slug: &str) -> String {
    heading_text(source).unwrap_or_else(|| capitalize(slug))
}

/// Text of the first heading up to any nested markup, if non-empty.
/// A heading rendered through `getText([..])` is decoded.
pub fn heading_text(source: &str) -> Option<String> {
    let inner = HEADING.captures(source)?.get(1)?.as_str();
    let text = match inner.find('<') {
        Some(idx) => &inner[..idx],
        None => inner,
    };
    let text = text.trim();
    if let Some(decoded) = get_text_call(text) {
        return Some(decoded.trim().to_string());
    }
    (!text.is_empty()).then(|| text.to_string())
}

/// Short bio, tried against each bio pattern in priority order.
pub fn resolve_bio(source: &str) -> Option<String> {
    [
        &*BIO_SMALL_TEXT,
        &*BIO_SUBTITLE_LITERAL,
        &*BIO_NGL_MARKER,
        &*BIO_BRAND_COLOR,
    ]
    .into_iter()
    .find_map(|pattern| trimmed_capture(pattern, source))
}

fn trimmed_capture(pattern: &Regex, source: &str) -> Option<String> {
    let text = pattern.captures(source)?.get(1)?.as_str().trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_heading() {
        assert_eq!(resolve_title("<h1>frankie</h1>", "x"), "frankie");
    }

    #[test]
    fn test_title_strips_nested_markup() {
        let src = r#"<h1 className="text-3xl">
            jen
            <Sparkles className="h-5 w-5" />
        </h1>"#;
        assert_eq!(resolve_title(src, "jen"), "jen");
    }

    #[test]
    fn test_title_decodes_obfuscated_heading() {
        let src = r#"<h1 className="text-3xl font-bold">
            {getText([108, 105, 116, 116, 108, 101, 108, 111, 117, 120, 120, 120])}
            <Sparkles className="h-5 w-5" />
        </h1>"#;
        assert_eq!(resolve_title(src, "littlelouxxx"), "littlelouxxx");
        assert_eq!(
            heading_text("<h1>{ getText([76, 111, 117]) }</h1>").as_deref(),
            Some("Lou")
        );
    }

    #[test]
    fn test_title_keeps_other_expressions_verbatim() {
        assert_eq!(resolve_title("<h1>{name}</h1>", "x"), "{name}");
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        assert_eq!(resolve_title("<div>no heading</div>", "dana"), "Dana");
        assert_eq!(resolve_title("<h1><span>x</span></h1>", "dana"), "Dana");
    }

    #[test]
    fn test_bio_small_text_wins() {
        let src = r#"
            subtitle: "from literal"
            <p className="text-sm text-gray-500">from paragraph</p>
        "#;
        assert_eq!(resolve_bio(src).as_deref(), Some("from paragraph"));
    }

    #[test]
    fn test_bio_subtitle_literal() {
        assert_eq!(
            resolve_bio(r#"const page = { subtitle: "hey there" };"#).as_deref(),
            Some("hey there")
        );
    }

    #[test]
    fn test_bio_ngl_marker() {
        let src = "<span>ngl, my bio will shock you</span>";
        assert_eq!(
            resolve_bio(src).as_deref(),
            Some("my bio will shock you")
        );
    }

    #[test]
    fn test_bio_brand_color() {
        let src = r#"<p style={s} data-x="text-[#8B7355]">brand tagline</p>"#;
        assert_eq!(resolve_bio(src).as_deref(), Some("brand tagline"));
    }

    #[test]
    fn test_bio_absent() {
        assert_eq!(resolve_bio("<h1>frankie</h1>"), None);
    }
}
