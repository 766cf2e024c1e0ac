use std::fs;
use std::time::{Duration, Instant};

use crate::extractor::images::VERIFIED_BADGE_ID;
use crate::extractor::{Extraction, extract};

const CDN: &str = "https://2eovi9l2gc.ufs.sh/f/";

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

fn assert_link_pair(result: &Extraction, url: &str) {
    let links = &result.profile.links;
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].label, "Exclusive Content");
    assert_eq!(links[0].sort_order, 0);
    assert_eq!(links[1].label, "Subscribe Now");
    assert_eq!(links[1].sort_order, 1);
    assert!(links.iter().all(|link| link.url == url));
}

#[test]
fn test_extract_scripted_page() {
    let result = extract("jen", &fixture("scripted.tsx"));
    let profile = &result.profile;

    assert_eq!(profile.slug, "jen");
    assert_eq!(profile.title, "jen");
    assert_eq!(
        profile.subtitle.as_deref(),
        Some("ngl, my OF bio will shock you 👹🤣")
    );
    assert_eq!(
        profile.avatar_url,
        Some(format!("{CDN}XQC8QM7wDFrthOOeN7JiEcfAFW435V1LnPm2vkgNqaxYtzRS"))
    );
    assert_eq!(
        profile.preview_image_url,
        Some(format!("{CDN}XQC8QM7wDFrtWAFMwh5gbqUvXNlhmPadO3GES8j964o2Ft7T"))
    );
    assert_link_pair(&result, "https://onlyfans.com/jen/c3");

    let debug = &result.diagnostics;
    assert!(debug.found_title && debug.found_subtitle && debug.found_avatar && debug.found_preview);
    assert_eq!(debug.found_links, 2);
    assert_eq!(debug.image_base_url, None);
    assert_eq!(debug.image_ids_count, 0);
    assert_eq!(debug.hardcoded_urls_count, 2);
}

#[test]
fn test_extract_obfuscated_page() {
    let result = extract("karis", &fixture("obfuscated.tsx"));
    let profile = &result.profile;

    assert_eq!(profile.title, "karis");
    assert_eq!(profile.subtitle.as_deref(), Some("ngl, my OF bio will shock you"));
    assert_eq!(
        profile.avatar_url,
        Some(format!("{CDN}XQC8QM7wDFrtFWPlWRcf5QeZo76jBcMzg2DEVPJRlL80I1qm"))
    );
    assert_eq!(
        profile.preview_image_url,
        Some(format!("{CDN}XQC8QM7wDFrth3RFCSiEcfAFW435V1LnPm2vkgNqaxYtzRST"))
    );
    assert_link_pair(&result, "https://onlyfans.com/karisgunner");

    let debug = &result.diagnostics;
    assert_eq!(debug.image_base_url.as_deref(), Some(CDN));
    assert_eq!(debug.image_ids_count, 2);
    assert_eq!(debug.hardcoded_urls_count, 0);
}

#[test]
fn test_extract_static_page() {
    let result = extract("paigexb", &fixture("static.tsx"));
    let profile = &result.profile;

    assert_eq!(profile.title, "Paige");
    assert_eq!(profile.subtitle.as_deref(), Some("UK based, always online"));
    assert_eq!(
        profile.avatar_url,
        Some(format!("{CDN}XQC8QM7wDFrtG6AzEP4dI6gQWypxBht52wZXF49uYKDqErLn"))
    );
    // The logo sits between avatar and banner; the last candidate wins.
    assert_eq!(
        profile.preview_image_url,
        Some(format!("{CDN}XQC8QM7wDFrtaw01PuezjdJnwcF16THlXkoRthei5DYVuZLI"))
    );
    assert_link_pair(&result, "https://onlyfans.com/paigexb");
    assert_eq!(result.diagnostics.hardcoded_urls_count, 3);
}

#[test]
fn test_extract_bare_page() {
    let result = extract("dana", &fixture("bare.tsx"));
    let profile = &result.profile;

    assert_eq!(profile.title, "Dana");
    assert_eq!(profile.subtitle, None);
    assert_eq!(profile.avatar_url, None);
    assert_eq!(profile.preview_image_url, None);
    assert!(profile.links.is_empty());

    let debug = &result.diagnostics;
    assert!(debug.found_title);
    assert!(!debug.found_subtitle && !debug.found_avatar && !debug.found_preview);
    assert_eq!(debug.found_links, 0);
}

#[test]
fn test_char_code_array_yields_link_pair() {
    let result = extract(
        "a",
        "const chars = [104,116,116,112,115,58,47,47,97,46,99,111,109]",
    );
    assert_link_pair(&result, "https://a.com");
}

#[test]
fn test_heading_without_bio() {
    let result = extract("frankie", "<h1>frankie</h1>");
    assert_eq!(result.profile.title, "frankie");
    assert_eq!(result.profile.subtitle, None);
}

#[test]
fn test_badge_first_then_avatar() {
    let src = format!(
        r#"<Image src="https://cdn.example/f/{VERIFIED_BADGE_ID}" />
           <Image src="https://cdn.example/f/me" />"#
    );
    let result = extract("x", &src);
    assert_eq!(
        result.profile.avatar_url.as_deref(),
        Some("https://cdn.example/f/me")
    );
}

#[test]
fn test_badge_only_page_has_no_avatar() {
    let src = format!(r#"<Image src="https://cdn.example/f/{VERIFIED_BADGE_ID}" alt="Verified Badge" />"#);
    let result = extract("x", &src);
    assert_eq!(result.profile.avatar_url, None);
    assert_eq!(result.profile.preview_image_url, None);
}

#[test]
fn test_duplicate_preview_is_dropped() {
    let src = r#"
        const avatarContainer = el; img.src = "https://cdn.example/f/me";
        Exclusive Content
        <Image src={ok ? "https://cdn.example/f/me" : ""} />
    "#;
    let result = extract("x", src);
    assert_eq!(
        result.profile.avatar_url.as_deref(),
        Some("https://cdn.example/f/me")
    );
    assert_eq!(result.profile.preview_image_url, None);
}

#[test]
fn test_partial_extraction_is_not_an_error() {
    let result = extract("solo", "// https://onlyfans.com/solo\n");
    assert_eq!(result.profile.title, "Solo");
    assert_eq!(result.profile.avatar_url, None);
    assert_link_pair(&result, "https://onlyfans.com/solo");
}

#[test]
fn test_extract_is_idempotent() {
    for name in ["scripted.tsx", "obfuscated.tsx", "static.tsx", "bare.tsx"] {
        let source = fixture(name);
        let first = extract("page", &source);
        let second = extract("page", &source);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first.profile).unwrap(),
            serde_json::to_vec(&second.profile).unwrap()
        );
    }
}

#[test]
fn test_avatar_and_preview_are_disjoint_on_fixtures() {
    for name in ["scripted.tsx", "obfuscated.tsx", "static.tsx", "bare.tsx"] {
        let profile = extract("page", &fixture(name)).profile;
        if let (Some(avatar), Some(preview)) = (&profile.avatar_url, &profile.preview_image_url) {
            assert_ne!(avatar, preview, "{name}");
        }
    }
}

#[test]
fn test_marker_flood_stays_linear() {
    let source = "avatarContainer Exclusive Content id=\"avatar-container\" Verified Badge "
        .repeat(20_000);

    let started = Instant::now();
    let result = extract("flood", &source);
    let elapsed = started.elapsed();

    assert_eq!(result.profile.avatar_url, None);
    assert_eq!(result.profile.preview_image_url, None);
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use crate::extractor::decode::decode_char_codes;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(source in ".*", slug in "[a-z_]{0,12}") {
            let _ = extract(&slug, &source);
        }

        #[test]
        fn test_title_is_never_empty_for_nonempty_slug(source in ".*", slug in "[a-z][a-z_]{0,11}") {
            let result = extract(&slug, &source);
            prop_assert!(!result.profile.title.is_empty());
        }

        #[test]
        fn test_links_are_empty_or_a_pair(source in ".*") {
            let links = extract("p", &source).profile.links;
            prop_assert!(links.is_empty() || links.len() == 2);
            if links.len() == 2 {
                prop_assert_eq!(&links[0].url, &links[1].url);
            }
        }

        #[test]
        fn test_avatar_and_preview_disjoint(
            a in "https://x/[a-c]{1,2}",
            b in "https://x/[a-c]{1,2}",
            c in "https://x/[a-c]{1,2}",
        ) {
            let source = format!(r#"<Image src="{a}" /> Exclusive Content <Image src={{ok ? "{b}" : ""}} /> <Image src="{c}" />"#);
            let profile = extract("p", &source).profile;
            if let (Some(avatar), Some(preview)) = (profile.avatar_url, profile.preview_image_url) {
                prop_assert_ne!(avatar, preview);
            }
        }

        #[test]
        fn test_char_code_round_trip(s in "\\PC*") {
            let codes: Vec<u32> = s.chars().map(u32::from).collect();
            prop_assert_eq!(decode_char_codes(&codes), s);
        }
    }
}
