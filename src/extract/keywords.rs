use serde::Deserialize;
use serde_json::Value;
use crate::error::{AppError, Result};

/// `body` of the trending payload. Only the keyword list is read.
#[derive(Deserialize)]
struct TrendingBody {
    #[serde(rename = "topKeywordSearch", default)]
    top_keyword_search: Option<Value>,
}

/// One `topKeywordSearch` entry. A non-string `keyword` decodes as `None`.
#[derive(Deserialize)]
struct KeywordEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    keyword: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Pulls `body.topKeywordSearch[*].keyword` out of the trending payload.
///
/// The two outer levels are required; individual entries that are not
/// objects or carry no string `keyword` are skipped.
pub fn extract_keywords(json: &Value) -> Result<Vec<String>> {
    let body = match json.get("body") {
        Some(body @ Value::Object(_)) => TrendingBody::deserialize(body)?,
        _ => return Err(AppError::Schema("invalid response format".to_string())),
    };

    let entries = match body.top_keyword_search {
        Some(Value::Array(entries)) => entries,
        _ => {
            return Err(AppError::Schema(
                "missing 'topKeywordSearch' in response".to_string(),
            ));
        }
    };

    let keywords = entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| KeywordEntry::deserialize(entry).ok())
        .filter_map(|entry| entry.keyword)
        .collect();

    Ok(keywords)
}
