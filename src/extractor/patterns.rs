//! Compiled regex patterns for mining legacy page source.
//!
//! Every pattern is compiled once on first use. Patterns are grouped by the
//! field they feed; within a group the declaration order is the priority order
//! the resolvers try them in.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid extractor pattern {pattern:?}: {e}"))
}

// -----------------------------------------------------------------------------
// De-obfuscation
// -----------------------------------------------------------------------------

/// `const chars = [104, 116, ...]`, possibly spread over several lines.
pub static CONST_CHARS_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"const\s+chars\s*=\s*\[([0-9,\s]+)\]"));

/// Same array without the `const` qualifier.
pub static CHARS_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| compile(r"chars\s*=\s*\[([0-9,\s]+)\]"));

/// `String.fromCharCode(104, 116, ...)` with literal integer arguments.
pub static FROM_CHAR_CODE_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"String\.fromCharCode\(([0-9,\s]+)\)"));

// -----------------------------------------------------------------------------
// Title and bio
// -----------------------------------------------------------------------------

/// Inner content of the first `<h1>`; nested markup is stripped afterwards.
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<h1[^>]*>(.*?)</h1>"));

/// Heading text rendered through a `{getText([..])}` char-code call.
pub static GET_TEXT_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\{\s*getText\(\s*\[([0-9,\s]+)\]\s*\)\s*\}$"));

pub static BIO_SMALL_TEXT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)<p[^>]*className[^>]*text-sm[^>]*>([^<]+)</p>"));

pub static BIO_SUBTITLE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)subtitle[:\s]*["']([^"']+)["']"#));

/// Several legacy bios open with "ngl,"; the text after the marker is the bio.
pub static BIO_NGL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)ngl,?\s+([^"'<]+)"#));

pub static BIO_BRAND_COLOR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)<p[^>]*text-\[#8B7355\][^>]*>([^<]+)</p>"));

// -----------------------------------------------------------------------------
// Images
// -----------------------------------------------------------------------------

/// `getObfuscatedImageUrl("<id>")`.
pub static OBFUSCATED_IMAGE_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"getObfuscatedImageUrl\(\s*["']([^"']+)["']\s*\)"#));

/// Script assignment `img.src = "https://..."`.
pub static IMG_SRC_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)img\.src\s*=\s*["'](https?://[^"']+)["']"#));

/// JSX `src="https://..."` or `src={"https://..."}`.
pub static SRC_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)src\s*=\s*\{?\s*["'](https?://[^"']+)["']"#));

/// JSX conditional `src={loaded ? "https://..." : ""}`; captures the true branch.
pub static CONDITIONAL_SRC: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)src\s*=\s*\{[^}?]*\?\s*["'](https?://[^"']+)["']"#));

/// Either an absolute `src` value (group 1) or an obfuscated id (group 2).
pub static SRC_OR_OBFUSCATED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?i)(?:src\s*=\s*\{?\s*["'](https?://[^"']+)["']|getObfuscatedImageUrl\(\s*["']([^"']+)["']\s*\))"#,
    )
});

/// Either an obfuscated id (group 1) or any quoted absolute URL (group 2).
pub static OBFUSCATED_OR_QUOTED_URL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?:getObfuscatedImageUrl\(\s*["']([^"']+)["']\s*\)|["'](https?://[^"']+)["'])"#)
});

// Markers that anchor the proximity windows.

pub static AVATAR_CONTAINER_VAR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)avatarContainer"));

pub static AVATAR_CONTAINER_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)id\s*=\s*["']avatar-container["']"#));

pub static EXCLUSIVE_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Exclusive Content"));

pub static EXCLUSIVE_PREVIEW_ALT: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)alt\s*=\s*["']Exclusive Content Preview["']"#));

pub static VERIFIED_BADGE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)Verified Badge"));

// -----------------------------------------------------------------------------
// Outbound URL
// -----------------------------------------------------------------------------

/// `// https://onlyfans.com/<profile>` left behind in a comment.
pub static OUTBOUND_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)//\s*(https?://onlyfans\.com/\S+)"));

pub static OUTBOUND_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)https?://onlyfans\.com/[^\s"')]+"#));

/// Scheme-less `onlyfans.com/<path>` fragment.
pub static OUTBOUND_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)onlyfans\.com/[a-zA-Z0-9_/]+"));
