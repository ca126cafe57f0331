use crate::core::acronyms::AcronymDictionary;
use crate::domain::model::Category;
use crate::utils::error::{ResolverError, Result};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct SiteSettings {
    topics: Option<Vec<SiteTopic>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TopicId {
    Text(String),
    Number(i64),
}

impl TopicId {
    fn into_string(self) -> String {
        match self {
            TopicId::Text(text) => text.trim().to_string(),
            TopicId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SiteTopic {
    id: Option<TopicId>,
    #[serde(alias = "name")]
    title: Option<String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Builds categories from a portal's `SiteSettings` payload.
///
/// Topics without id or title are skipped and repeated ids keep their first
/// occurrence. Aliases come from the title, any synonyms/aliases the payload
/// carries, and the dictionary acronyms whose title the topic title contains.
pub fn categories_from_site_settings(
    portal: &str,
    payload: &str,
    dictionary: &AcronymDictionary,
) -> Result<Vec<Category>> {
    let settings: SiteSettings = serde_json::from_str(payload)?;
    let topics = settings.topics.ok_or_else(|| ResolverError::IngestError {
        message: format!("no topics found for {}", portal),
    })?;

    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    let mut skipped = 0usize;

    for topic in topics {
        let id = topic.id.map(TopicId::into_string).unwrap_or_default();
        let title = topic.title.map(|t| t.trim().to_string()).unwrap_or_default();

        if id.is_empty() || title.is_empty() || !seen.insert(id.clone()) {
            skipped += 1;
            continue;
        }

        let mut extra: Vec<String> = topic.synonyms;
        extra.extend(topic.aliases);
        extra.extend(
            dictionary
                .acronyms_for_title(&title)
                .into_iter()
                .map(str::to_string),
        );

        categories.push(Category::new(portal, id, title, &extra));
    }

    tracing::info!(
        portal = %portal,
        categories = categories.len(),
        skipped,
        "parsed site settings"
    );

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topics() {
        let payload = r#"{
            "topics": [
                {"id": "a1", "title": "Miljøbeskyttelsesloven"},
                {"id": 7, "name": "Miljøvurdering af konkrete projekter", "synonyms": ["VVM"]},
                {"id": "a1", "title": "Duplicate"},
                {"id": "", "title": "No id"},
                {"id": "x", "title": "  "}
            ]
        }"#;

        let dictionary = AcronymDictionary::environment_and_planning();
        let categories =
            categories_from_site_settings("mfkn.naevneneshus.dk", payload, &dictionary).unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category_id(), "a1");
        assert!(categories[0].has_alias("mbl"));
        assert!(categories[0].has_alias("miljobeskyttelsesloven"));

        assert_eq!(categories[1].category_id(), "7");
        assert!(categories[1].has_alias("vvm"));
        assert!(categories[1].has_alias("makp"));
        assert_eq!(categories[1].portal_id(), "mfkn.naevneneshus.dk");
    }

    #[test]
    fn test_missing_topics_is_an_error() {
        let dictionary = AcronymDictionary::default();
        let err = categories_from_site_settings("p", r#"{"other": 1}"#, &dictionary).unwrap_err();
        assert!(matches!(err, ResolverError::IngestError { .. }));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dictionary = AcronymDictionary::default();
        let err = categories_from_site_settings("p", "not json", &dictionary).unwrap_err();
        assert!(matches!(err, ResolverError::SerializationError(_)));
    }
}
