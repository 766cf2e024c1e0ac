pub mod decode;
pub mod images;
pub mod model;
pub mod outbound;
pub mod patterns;
pub mod text;

#[cfg(test)]
mod tests;

pub use model::{Diagnostics, ExtractedProfile, Extraction, PageLink};

use images::ImageContext;

/// Returns the result of the first tier that yields a value.
pub fn first_match(tiers: &[&dyn Fn() -> Option<String>]) -> Option<String> {
    tiers.iter().find_map(|tier| tier())
}

/// Mines a structured profile out of legacy page source.
///
/// Pure and total: missing fields come back as `None` / empty links, never
/// as an error.
pub fn extract(slug: &str, source: &str) -> Extraction {
    // 1. Title and bio
    let title = text::resolve_title(source, slug);
    let subtitle = text::resolve_bio(source);

    // 2. Images; the preview resolver needs the avatar to stay disjoint from it
    let images = ImageContext::new(source);
    let avatar_url = images::resolve_avatar(&images);
    let preview_image_url = images::resolve_preview(&images, avatar_url.as_deref())
        .filter(|preview| Some(preview.as_str()) != avatar_url.as_deref());

    // 3. Outbound URL, doubled into the two call-to-action links
    let links = outbound::resolve_outbound_url(source)
        .map(|url| PageLink::pair_for(&url))
        .unwrap_or_default();

    let profile = ExtractedProfile {
        slug: slug.to_string(),
        title,
        subtitle,
        avatar_url,
        preview_image_url,
        links,
    };

    // 4. Diagnostics report on the resolved values only
    let diagnostics = Diagnostics {
        found_title: !profile.title.is_empty(),
        found_subtitle: profile.subtitle.is_some(),
        found_avatar: profile.avatar_url.is_some(),
        found_preview: profile.preview_image_url.is_some(),
        found_links: profile.links.len(),
        image_base_url: images.base_url().map(str::to_string),
        image_ids_count: images::image_ids(source).len(),
        hardcoded_urls_count: images::hardcoded_image_urls(source).len(),
        avatar_url: profile.avatar_url.clone(),
        preview_url: profile.preview_image_url.clone(),
    };

    Extraction {
        profile,
        diagnostics,
    }
}
