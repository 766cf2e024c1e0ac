use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EXCLUSIVE_CONTENT_LABEL: &str = "Exclusive Content";
pub const SUBSCRIBE_NOW_LABEL: &str = "Subscribe Now";

/// Structured profile mined out of one legacy page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExtractedProfile {
    pub slug: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub avatar_url: Option<String>,
    /// Banner image of the exclusive content card. Never equal to `avatar_url`.
    #[serde(rename = "exclusive_preview_image")]
    pub preview_image_url: Option<String>,
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageLink {
    pub label: String,
    pub url: String,
    pub sort_order: i32,
}

impl PageLink {
    /// The two call-to-action links every legacy page routes to one URL.
    pub fn pair_for(url: &str) -> Vec<PageLink> {
        vec![
            PageLink {
                label: EXCLUSIVE_CONTENT_LABEL.to_string(),
                url: url.to_string(),
                sort_order: 0,
            },
            PageLink {
                label: SUBSCRIBE_NOW_LABEL.to_string(),
                url: url.to_string(),
                sort_order: 1,
            },
        ]
    }
}

/// Operator-facing summary of what the extractor saw. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Diagnostics {
    pub found_title: bool,
    pub found_subtitle: bool,
    pub found_avatar: bool,
    pub found_preview: bool,
    pub found_links: usize,
    pub image_base_url: Option<String>,
    pub image_ids_count: usize,
    pub hardcoded_urls_count: usize,
    pub avatar_url: Option<String>,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub profile: ExtractedProfile,
    pub diagnostics: Diagnostics,
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
