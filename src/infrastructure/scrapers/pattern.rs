use super::ListingExtractor;
use crate::domain::ScrapedGame;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex extractor for the thumbnail grid. Tolerates whitespace between tags
/// and attributes, either quote style, and an optional `alt` attribute.
/// Each attribute value ends at the quote that opened it, so `'` may appear
/// inside a double-quoted value and `"` inside a single-quoted one.
pub struct PatternExtractor;

static REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"<div\s+class\s*=\s*(?:"thumb"|'thumb')"#,
        r#"\s+id\s*=\s*(?:"game-(?P<id_d>\d+)"|'game-(?P<id_s>\d+)')\s*>"#,
        r#"\s*<a\s+href\s*=\s*(?:"(?P<href_d>[^"]+)"|'(?P<href_s>[^']+)')\s*>"#,
        r#"\s*<img\s+src\s*=\s*(?:"(?P<src_d>[^"]+)"|'(?P<src_s>[^']+)')"#,
        r#"(?:\s+alt\s*=\s*(?:"[^"]*"|'[^']*'))?\s*/?>"#,
        r#"\s*<span\s+class\s*=\s*(?:"GameName"|'GameName')\s*>(?P<name>[^<]*)</span>"#,
        r#"\s*<span\s+class\s*=\s*(?:"GameRating"|'GameRating')\s*>\s*(?P<rating>[\d.]+)\s*</span>"#,
        r#"\s*</a>\s*</div>"#,
    ))
    .unwrap()
});

/// Value of whichever quote-style group took part in the match.
fn quoted<'h>(caps: &Captures<'h>, double: &str, single: &str) -> Option<&'h str> {
    caps.name(double)
        .or_else(|| caps.name(single))
        .map(|m| m.as_str())
}

fn to_game(caps: Captures) -> Option<ScrapedGame> {
    Some(ScrapedGame {
        id: quoted(&caps, "id_d", "id_s")?.to_string(),
        url_suffix: quoted(&caps, "href_d", "href_s")?.to_string(),
        image: quoted(&caps, "src_d", "src_s")?.to_string(),
        name: caps.name("name")?.as_str().to_string(),
        rating: caps.name("rating")?.as_str().to_string(),
    })
}

impl ListingExtractor for PatternExtractor {
    fn extract_games(&self, html: &str) -> Vec<ScrapedGame> {
        REGEX.captures_iter(html).filter_map(to_game).collect()
    }
}
