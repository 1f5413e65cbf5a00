use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use super::element_text;

/// Returned in place of an empty body.
pub const NO_CONTENT: &str = "No content available.";

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.detail__body-text > p").expect("Failed to parse paragraph selector")
});

/// Joins the trimmed text of every body paragraph with newlines.
pub fn extract_article(html: &str) -> String {
    let document = Html::parse_document(html);

    let paragraphs: Vec<String> = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|p| element_text(p).trim().to_string())
        .collect();

    if paragraphs.is_empty() {
        return NO_CONTENT.to_string();
    }

    paragraphs.join("\n")
}
