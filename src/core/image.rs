//! Image-reference rewriting for the SDL template.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::core::constants;

/// Matches the deployable image line: fixed registry host and image
/// name, wildcard organization segment, any non-whitespace tag. The
/// organization segment is wildcarded because the registry owner name
/// has not been stable across revisions.
static IMAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"image: {}/[^/\s]+/{}:\S+",
        regex::escape(constants::IMAGE_REGISTRY),
        regex::escape(constants::IMAGE_NAME)
    );
    Regex::new(&pattern).unwrap()
});

/// Replace every matched image line with `image: <reference>`.
///
/// The reference is inserted verbatim (no capture expansion), so tags
/// and digests pass through untouched. A template with no matching line
/// is returned unchanged — the caller treats that as a no-op, not an
/// error.
pub fn rewrite(content: &str, reference: &str) -> String {
    let replacement = format!("image: {reference}");
    match IMAGE_LINE.replace_all(content, NoExpand(&replacement)) {
        Cow::Borrowed(_) => {
            debug!("no image line matched; template unchanged");
            content.to_string()
        }
        Cow::Owned(rewritten) => {
            debug!(reference, "image reference rewritten");
            rewritten
        }
    }
}
