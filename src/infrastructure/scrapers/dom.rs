use super::ListingExtractor;
use crate::domain::ScrapedGame;
use crate::error::{GameError, Result};
use scraper::{ElementRef, Html, Selector};

/// Extractor that parses the page into a DOM and checks each thumbnail's
/// structure element by element. Entities in names are decoded by the parser.
pub struct DomExtractor {
    thumb: Selector,
}

impl DomExtractor {
    pub fn new() -> Result<Self> {
        let thumb =
            Selector::parse("div.thumb[id]").map_err(|e| GameError::Selector(e.to_string()))?;
        Ok(Self { thumb })
    }
}

fn element_children<'a>(element: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn parse_thumb(thumb: ElementRef) -> Option<ScrapedGame> {
    let id = thumb.value().attr("id")?.strip_prefix("game-")?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let anchor = match element_children(&thumb).as_slice() {
        [a] if a.value().name() == "a" => *a,
        _ => return None,
    };
    let href = anchor.value().attr("href").filter(|h| !h.is_empty())?;

    let (img, name, rating) = match element_children(&anchor).as_slice() {
        [img, name, rating]
            if img.value().name() == "img"
                && name.value().name() == "span"
                && has_class(name, "GameName")
                && rating.value().name() == "span"
                && has_class(rating, "GameRating") =>
        {
            (*img, *name, *rating)
        }
        _ => return None,
    };

    let image = img.value().attr("src").filter(|s| !s.is_empty())?;

    let rating = rating.text().collect::<String>();
    let rating = rating.trim();
    if rating.is_empty() || !rating.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    Some(ScrapedGame {
        id: id.to_string(),
        url_suffix: href.to_string(),
        image: image.to_string(),
        name: name.text().collect(),
        rating: rating.to_string(),
    })
}

impl ListingExtractor for DomExtractor {
    fn extract_games(&self, html: &str) -> Vec<ScrapedGame> {
        let document = Html::parse_document(html);
        document.select(&self.thumb).filter_map(parse_thumb).collect()
    }
}
