//! Avatar and preview image resolution.
//!
//! Legacy pages reference images either by absolute URL or through
//! `getObfuscatedImageUrl("<id>")`, where the CDN base is rebuilt at runtime
//! from a `String.fromCharCode(..)` call. Both forms are collected here and run
//! through the tiered resolvers below.

use regex::{Captures, Regex};

use crate::extractor::decode::from_char_code_call;
use crate::extractor::first_match;
use crate::extractor::patterns::{
    AVATAR_CONTAINER_ID, AVATAR_CONTAINER_VAR, CONDITIONAL_SRC, EXCLUSIVE_CONTENT,
    EXCLUSIVE_PREVIEW_ALT, IMG_SRC_ASSIGNMENT, OBFUSCATED_IMAGE_ID, OBFUSCATED_OR_QUOTED_URL,
    SRC_ATTRIBUTE, SRC_OR_OBFUSCATED, VERIFIED_BADGE,
};

/// CDN id of the "verified" badge shared by every legacy page.
pub const VERIFIED_BADGE_ID: &str = "XQC8QM7wDFrt98ZBhgCmgTM2aZbQ3nqXNLtGe4hVci06FUJk";

const AVATAR_WINDOW: usize = 1500;
const PREVIEW_WINDOW: usize = 2000;
const PREVIEW_ALT_WINDOW: usize = 500;
const BADGE_WINDOW: usize = 500;

/// Per-document facts shared by the image resolvers.
#[derive(Debug)]
pub struct ImageContext<'a> {
    source: &'a str,
    base_url: Option<String>,
    badge_ref: Option<String>,
}

impl<'a> ImageContext<'a> {
    pub fn new(source: &'a str) -> Self {
        let base_url = resolve_image_base(source);
        let badge_ref = verified_badge_reference(source, base_url.as_deref());
        Self {
            source,
            base_url,
            badge_ref,
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Prefixes an obfuscated id with the decoded CDN base.
    fn with_base(&self, id: &str) -> Option<String> {
        self.base_url.as_ref().map(|base| format!("{base}{id}"))
    }

    fn is_badge(&self, url: &str) -> bool {
        url.contains(VERIFIED_BADGE_ID) || self.badge_ref.as_deref() == Some(url)
    }

    fn accept(&self, url: String) -> Option<String> {
        (!self.is_badge(&url)).then_some(url)
    }
}

/// CDN base rebuilt from the first `String.fromCharCode(..)` call.
pub fn resolve_image_base(source: &str) -> Option<String> {
    from_char_code_call(source)
}

/// Distinct obfuscated image ids in document order.
pub fn image_ids(source: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for caps in OBFUSCATED_IMAGE_ID.captures_iter(source) {
        let id = &caps[1];
        if !ids.iter().any(|seen| seen == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Distinct absolute image URLs in document order, badge excluded.
pub fn hardcoded_image_urls(source: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = [&*IMG_SRC_ASSIGNMENT, &*SRC_ATTRIBUTE, &*CONDITIONAL_SRC]
        .into_iter()
        .flat_map(|pattern| pattern.captures_iter(source))
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()))
        .filter(|(_, url)| !url.contains(VERIFIED_BADGE_ID))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);

    let mut urls: Vec<String> = Vec::new();
    for (_, url) in found {
        if !urls.iter().any(|seen| seen == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

/// First image referenced shortly after a "Verified Badge" marker, as a URL.
fn verified_badge_reference(source: &str, base_url: Option<&str>) -> Option<String> {
    let caps = captures_near(source, &VERIFIED_BADGE, BADGE_WINDOW, &OBFUSCATED_OR_QUOTED_URL)?;
    if let Some(id) = caps.get(1) {
        return base_url.map(|base| format!("{base}{}", id.as_str()));
    }
    caps.get(2).map(|url| url.as_str().to_string())
}

/// Returns the first match of `pattern` starting at most `window` characters
/// past an occurrence of `marker`, trying markers in document order.
///
/// The next match start is cached across markers and only searched again once
/// a marker lies beyond it, so the whole scan stays linear in `source`.
fn captures_near<'s>(
    source: &'s str,
    marker: &Regex,
    window: usize,
    pattern: &Regex,
) -> Option<Captures<'s>> {
    let mut next_start: Option<usize> = None;
    for m in marker.find_iter(source) {
        let from = m.end();
        if next_start.is_none_or(|start| start < from) {
            next_start = Some(pattern.find_at(source, from)?.start());
        }
        let start = next_start?;
        if within_chars(&source[from..start], window) {
            return pattern.captures_at(source, from);
        }
    }
    None
}

fn within_chars(gap: &str, window: usize) -> bool {
    gap.len() <= window || gap.chars().take(window + 1).count() <= window
}

fn group(caps: &Captures<'_>, idx: usize) -> Option<String> {
    caps.get(idx).map(|m| m.as_str().to_string())
}

// -----------------------------------------------------------------------------
// Avatar
// -----------------------------------------------------------------------------

pub fn resolve_avatar(ctx: &ImageContext<'_>) -> Option<String> {
    first_match(&[
        &|| avatar_from_script_assignment(ctx),
        &|| avatar_from_obfuscated_near_container(ctx),
        &|| avatar_from_container_element(ctx),
        &|| avatar_from_document(ctx),
    ])
}

/// `img.src = "https://..."` shortly after the `avatarContainer` variable.
pub fn avatar_from_script_assignment(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(ctx.source, &AVATAR_CONTAINER_VAR, AVATAR_WINDOW, &IMG_SRC_ASSIGNMENT)?;
    ctx.accept(group(&caps, 1)?)
}

/// `getObfuscatedImageUrl("<id>")` shortly after the `avatarContainer` variable.
pub fn avatar_from_obfuscated_near_container(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(ctx.source, &AVATAR_CONTAINER_VAR, AVATAR_WINDOW, &OBFUSCATED_IMAGE_ID)?;
    ctx.accept(ctx.with_base(caps.get(1)?.as_str())?)
}

/// First image reference after the element with `id="avatar-container"`.
pub fn avatar_from_container_element(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(ctx.source, &AVATAR_CONTAINER_ID, AVATAR_WINDOW, &SRC_OR_OBFUSCATED)?;
    let url = match (caps.get(1), caps.get(2)) {
        (Some(url), _) => url.as_str().to_string(),
        (None, Some(id)) => ctx.with_base(id.as_str())?,
        (None, None) => return None,
    };
    ctx.accept(url)
}

/// Whole-document fallback: first absolute URL, then first obfuscated id.
pub fn avatar_from_document(ctx: &ImageContext<'_>) -> Option<String> {
    hardcoded_image_urls(ctx.source)
        .into_iter()
        .find(|url| !ctx.is_badge(url))
        .or_else(|| {
            image_ids(ctx.source)
                .iter()
                .filter_map(|id| ctx.with_base(id))
                .find(|url| !ctx.is_badge(url))
        })
}

// -----------------------------------------------------------------------------
// Preview
// -----------------------------------------------------------------------------

/// Resolves the exclusive-content banner; never returns the avatar itself.
pub fn resolve_preview(ctx: &ImageContext<'_>, avatar: Option<&str>) -> Option<String> {
    let distinct = |url: Option<String>| url.filter(|u| Some(u.as_str()) != avatar);
    first_match(&[
        &|| distinct(preview_from_conditional_src(ctx)),
        &|| distinct(preview_from_obfuscated_near_marker(ctx)),
        &|| distinct(preview_from_alt_text(ctx)),
        &|| distinct(preview_from_document(ctx, avatar)),
    ])
}

/// True branch of a conditional `src` shortly after "Exclusive Content".
pub fn preview_from_conditional_src(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(ctx.source, &EXCLUSIVE_CONTENT, PREVIEW_WINDOW, &CONDITIONAL_SRC)?;
    ctx.accept(group(&caps, 1)?)
}

/// Obfuscated id shortly after "Exclusive Content".
pub fn preview_from_obfuscated_near_marker(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(ctx.source, &EXCLUSIVE_CONTENT, PREVIEW_WINDOW, &OBFUSCATED_IMAGE_ID)?;
    ctx.accept(ctx.with_base(caps.get(1)?.as_str())?)
}

/// Conditional `src` on the element whose alt text is "Exclusive Content Preview".
pub fn preview_from_alt_text(ctx: &ImageContext<'_>) -> Option<String> {
    let caps = captures_near(
        ctx.source,
        &EXCLUSIVE_PREVIEW_ALT,
        PREVIEW_ALT_WINDOW,
        &CONDITIONAL_SRC,
    )?;
    ctx.accept(group(&caps, 1)?)
}

/// Whole-document fallback over every image candidate in document order.
///
/// Legacy pages place the avatar first and the preview second, so the last
/// remaining candidate wins. This is a convention, not a guarantee.
pub fn preview_from_document(ctx: &ImageContext<'_>, avatar: Option<&str>) -> Option<String> {
    document_candidates(ctx)
        .into_iter()
        .filter(|url| Some(url.as_str()) != avatar && !ctx.is_badge(url))
        .last()
}

/// Absolute URLs and base-resolved ids, merged in document order, distinct.
fn document_candidates(ctx: &ImageContext<'_>) -> Vec<String> {
    let mut found: Vec<(usize, String)> = Vec::new();
    for pattern in [&*IMG_SRC_ASSIGNMENT, &*SRC_ATTRIBUTE, &*CONDITIONAL_SRC] {
        for caps in pattern.captures_iter(ctx.source) {
            if let Some(m) = caps.get(1) {
                found.push((m.start(), m.as_str().to_string()));
            }
        }
    }
    for caps in OBFUSCATED_IMAGE_ID.captures_iter(ctx.source) {
        if let Some(m) = caps.get(1)
            && let Some(url) = ctx.with_base(m.as_str())
        {
            found.push((m.start(), url));
        }
    }
    found.sort_by_key(|(pos, _)| *pos);

    let mut urls: Vec<String> = Vec::new();
    for (_, url) in found {
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}
