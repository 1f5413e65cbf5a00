use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use crate::models::PartialRecord;
use super::element_text;

static ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article").expect("Failed to parse item selector")
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h3.media__title").expect("Failed to parse title selector")
});

static DATE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(".media__date > span").expect("Failed to parse date selector")
});

static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("a").expect("Failed to parse link selector")
});

static DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.media__desc").expect("Failed to parse description selector")
});

static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("img").expect("Failed to parse image selector")
});

/// Parses a search results page into one [`PartialRecord`] per `<article>`,
/// in document order. Missing fields come back as empty strings.
pub fn extract_listing(html: &str) -> Vec<PartialRecord> {
    let document = Html::parse_document(html);

    document
        .select(&ITEM_SELECTOR)
        .map(parse_item)
        .collect()
}

fn parse_item(item: ElementRef<'_>) -> PartialRecord {
    PartialRecord {
        title: all_text(item, &TITLE_SELECTOR).trim().to_string(),
        url: first_attr(item, &LINK_SELECTOR, "href"),
        date: first_attr(item, &DATE_SELECTOR, "title"),
        description: all_text(item, &DESC_SELECTOR).trim().to_string(),
        image_url: first_attr(item, &IMAGE_SELECTOR, "src"),
    }
}

fn all_text(item: ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector).map(element_text).collect()
}

fn first_attr(item: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    item.select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}
