use crate::core::normalize::normalize;
use crate::domain::model::{AcronymEntry, Category};
use once_cell::sync::Lazy;
use regex::Regex;

static ACRONYM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-ZÆØÅ]{2,}\b").expect("acronym pattern is valid"));

const ENVIRONMENT_AND_PLANNING: [(&str, &str); 13] = [
    ("FM", "Fredning mv."),
    ("JFL", "Jordforureningsloven"),
    ("MBL", "Miljøbeskyttelsesloven"),
    ("MOV", "Miljømålsloven og vandplanlægningsloven"),
    ("MAKP", "Miljøvurdering af konkrete projekter"),
    ("MAPOP", "Miljøvurdering af planer og programmer"),
    ("ØL", "Øvrige lovområder"),
    ("RL", "Råstofloven"),
    ("SL", "Skovloven"),
    ("VL", "Vandløbsloven"),
    ("NBL", "Naturbeskyttelsesloven"),
    ("PL", "Planloven"),
    ("HDL", "Husdyrloven"),
];

/// Immutable acronym -> canonical title table for one legal domain.
///
/// Lookups are case-insensitive. When an acronym is listed more than once the
/// first entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymDictionary {
    entries: Vec<AcronymEntry>,
}

impl AcronymDictionary {
    pub fn new(entries: Vec<AcronymEntry>) -> Self {
        Self { entries }
    }

    /// Acronyms of the Danish environment and food appeals board.
    pub fn environment_and_planning() -> Self {
        Self::new(
            ENVIRONMENT_AND_PLANNING
                .iter()
                .map(|(acronym, title)| AcronymEntry {
                    acronym: acronym.to_string(),
                    title: title.to_string(),
                })
                .collect(),
        )
    }

    pub fn lookup(&self, value: &str) -> Option<&str> {
        let wanted = value.trim().to_uppercase();
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.acronym.trim().to_uppercase() == wanted)
            .map(|entry| entry.title.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    pub fn entries(&self) -> &[AcronymEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Acronyms whose canonical title occurs in `title`, used to seed aliases
    /// when categories are ingested.
    pub fn acronyms_for_title(&self, title: &str) -> Vec<&str> {
        let title = normalize(title);
        self.entries
            .iter()
            .filter(|entry| {
                let canonical = normalize(&entry.title);
                !canonical.is_empty() && title.contains(&canonical)
            })
            .map(|entry| entry.acronym.as_str())
            .collect()
    }
}

/// Distinct upper-case runs of two or more letters, in first-seen order.
pub fn detect_acronyms(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in ACRONYM_PATTERN.find_iter(text) {
        if !found.iter().any(|seen| seen == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}

/// Acronyms in `query` that neither a category alias nor the dictionary
/// resolves.
pub fn unknown_acronyms(
    query: &str,
    categories: &[Category],
    dictionary: &AcronymDictionary,
) -> Vec<String> {
    detect_acronyms(query)
        .into_iter()
        .filter(|acronym| {
            let normalized = normalize(acronym);
            !dictionary.contains(acronym)
                && !categories
                    .iter()
                    .any(|category| category.has_alias(&normalized))
        })
        .collect()
}
