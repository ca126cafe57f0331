use crate::core::acronyms::AcronymDictionary;
use crate::core::normalize::{collapse_whitespace, normalize, remove_whole_word};
use crate::domain::model::{Category, MatchSource, ResolutionOutcome};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static EXPLICIT_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i),?\s*\b(?:kategori|lovomr(?:å|aa|a)de|category)\s*:\s*([^,\n]+)")
        .expect("explicit clause pattern is valid")
});

/// Shorter aliases are skipped when bridging a dictionary title by substring.
const MIN_SUBSTRING_ALIAS_LEN: usize = 4;

/// Finds a `, kategori: <value>` style clause and resolves its value.
///
/// Returns `None` when there is no clause, or when the value resolves to no
/// category; in the latter case the query is left as it was and a warning is
/// logged.
pub fn parse_explicit_category(
    query: &str,
    categories: &[Category],
    dictionary: &AcronymDictionary,
) -> Option<ResolutionOutcome> {
    let captures = EXPLICIT_CLAUSE.captures(query)?;
    let clause = captures.get(0)?;
    let value = captures.get(1)?.as_str().trim();

    let Some(category) = resolve_value(value, categories, dictionary) else {
        tracing::warn!(value = %value, "could not resolve category value");
        return None;
    };

    // Other occurrences of the value go too, e.g. `JFL sag, kategori: JFL`.
    let cut = format!("{}{}", &query[..clause.start()], &query[clause.end()..]);
    let cleaned_query = remove_whole_word(&cut, value).unwrap_or_else(|| collapse_whitespace(&cut));

    tracing::debug!(
        value = %value,
        category_id = %category.category_id(),
        "explicit category clause resolved"
    );

    Some(ResolutionOutcome {
        category_id: category.category_id().to_string(),
        category_title: category.title().to_string(),
        matched: value.to_string(),
        cleaned_query,
        source: MatchSource::Explicit,
    })
}

/// Byte range of the first explicit clause, leading comma included.
pub(crate) fn clause_span(query: &str) -> Option<Range<usize>> {
    EXPLICIT_CLAUSE.find(query).map(|clause| clause.range())
}

/// Title, then alias, then dictionary bridge. First hit wins at every step.
fn resolve_value<'a>(
    value: &str,
    categories: &'a [Category],
    dictionary: &AcronymDictionary,
) -> Option<&'a Category> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        return None;
    }

    categories
        .iter()
        .find(|category| normalize(category.title()) == normalized)
        .or_else(|| {
            categories
                .iter()
                .find(|category| category.has_alias(&normalized))
        })
        .or_else(|| {
            let title = dictionary.lookup(value)?;
            find_by_title(title, categories)
        })
}

fn find_by_title<'a>(title: &str, categories: &'a [Category]) -> Option<&'a Category> {
    let canonical = normalize(title);
    if canonical.is_empty() {
        return None;
    }

    categories
        .iter()
        .find(|category| normalize(category.title()) == canonical)
        .or_else(|| {
            categories.iter().find(|category| {
                category.aliases().iter().any(|alias| {
                    alias.len() >= MIN_SUBSTRING_ALIAS_LEN
                        && (alias.contains(&canonical) || canonical.contains(alias.as_str()))
                })
            })
        })
}
