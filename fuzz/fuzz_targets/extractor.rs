#![no_main]

use libfuzzer_sys::fuzz_target;

use pagelift::extractor::extract;
use pagelift::pages::decode_source;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes go through the same decode path the store uses
    let Ok(source) = decode_source(data) else {
        return;
    };

    let result = extract("fuzz", &source);
    if let (Some(avatar), Some(preview)) = (
        result.profile.avatar_url.as_ref(),
        result.profile.preview_image_url.as_ref(),
    ) {
        assert_ne!(avatar, preview);
    }
    assert_eq!(result.diagnostics.found_links, result.profile.links.len());
});
