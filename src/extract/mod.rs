//! Pure extraction over fetched documents. Nothing in here touches the
//! network, so every function can be fed fixture strings directly.

pub mod article;
pub mod keywords;
pub mod listing;

pub use article::{extract_article, NO_CONTENT};
pub use keywords::extract_keywords;
pub use listing::extract_listing;

use scraper::ElementRef;

/// Concatenated text of every descendant text node, like jQuery's `.text()`.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
