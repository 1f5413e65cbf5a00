use serde::Serialize;

/// One listing item before its article body has been fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub title: String,
    pub url: String,
    pub date: String,
    pub description: String,
    pub image_url: String,
}

/// A listing item merged with its article content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub title: String,
    pub url: String,
    pub date: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub content: String,
    #[serde(rename = "img_url")]
    pub image_url: String,
}

impl SearchRecord {
    pub fn from_partial(partial: PartialRecord, content: String) -> Self {
        SearchRecord {
            title: partial.title,
            url: partial.url,
            date: partial.date,
            description: partial.description,
            content,
            image_url: partial.image_url,
        }
    }
}

/// Result of a multi-page search.
///
/// `dropped` counts listing items whose article could not be fetched. Those
/// items are left out of `records` rather than failing the whole search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub records: Vec<SearchRecord>,
    pub dropped: usize,
}
