//! Embeddable-media detection
//!
//! A record counts as having embeddable media when one of its `IsShownBy`
//! URLs points into a known third-party player. Matching is string-only;
//! nothing is fetched.

use mediatier_core::models::{LinkRole, Record};

/// Known embeddable-player URL patterns: audio/video-sharing players,
/// 3D-model platforms, and institutional embed endpoints. Matching is
/// case-sensitive on the URL prefix; `*` matches any run of characters and
/// every pattern carries an implicit trailing wildcard.
const EMBEDDABLE_URL_PATTERNS: &[&str] = &[
    "http://sounds.bl.uk/embed/",
    "http://eusounds.ait.co.at/player/",
    "http://www.dismarc.org/player/",
    "http://www.ccma.cat/tv3/alacarta/programa/titol/video/",
    "http://www.ina.fr/video/",
    "http://www.ina.fr/*/video/",
    "http://www.theeuropeanlibrary.org/tel4/newspapers/issue/fullscreen/",
    "http://archives.crem-cnrs.fr/archives/items/",
    "http://www.euscreen.eu/item.html",
    "https://sketchfab.com/3d-models/",
    "https://sketchfab.com/models/",
    "https://skfb.ly/",
    "http://soundcloud.com/",
    "https://soundcloud.com/",
    "http://player.vimeo.com/video/",
    "https://player.vimeo.com/video/",
    "http://vimeo.com/",
    "https://vimeo.com/",
    "https://www.youtube.com/watch",
    "https://www.youtube.com/v/",
    "https://youtu.be/",
];

/// Whether any of the record's `IsShownBy` URLs reaches a known player.
pub fn has_embeddable_media(record: &Record) -> bool {
    record
        .urls_with_roles(&[LinkRole::IsShownBy])
        .iter()
        .any(|url| matches_catalogue(url))
}

/// Whether a single URL matches the pattern catalogue.
pub fn matches_catalogue(url: &str) -> bool {
    EMBEDDABLE_URL_PATTERNS
        .iter()
        .any(|pattern| pattern_matches(pattern, url))
}

/// Prefix match with `*` wildcard segments: the first segment must anchor
/// the start of the URL, later segments must appear in order, and whatever
/// follows the last segment is accepted.
fn pattern_matches(pattern: &str, url: &str) -> bool {
    let mut segments = pattern.split('*');
    let first = segments.next().unwrap_or_default();
    let Some(mut remainder) = url.strip_prefix(first) else {
        return false;
    };
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        match remainder.find(segment) {
            Some(index) => remainder = &remainder[index + segment.len()..],
            None => return false,
        }
    }
    true
}
