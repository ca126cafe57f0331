use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A portal-scoped category with its normalized alias set.
///
/// The alias set always contains the normalized title and never an empty
/// string. Construction goes through [`Category::new`],
/// [`Category::with_aliases`] or deserialization from a [`CategoryRow`], all of
/// which enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CategoryRow", into = "CategoryRow")]
pub struct Category {
    pub(crate) portal_id: String,
    pub(crate) category_id: String,
    pub(crate) title: String,
    pub(crate) aliases: BTreeSet<String>,
}

impl Category {
    pub fn portal_id(&self) -> &str {
        &self.portal_id
    }

    pub fn category_id(&self) -> &str {
        &self.category_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn aliases(&self) -> &BTreeSet<String> {
        &self.aliases
    }
}

/// Row shape of the category store: `(portal, category_id)` keyed, with the
/// raw alias list as administrators and the sync job wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub portal: String,
    pub category_id: String,
    pub category_title: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Curated acronym, e.g. `MBL -> Miljøbeskyttelsesloven`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymEntry {
    pub acronym: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Explicit,
    Fuzzy,
}

/// Per-query result of category resolution. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub category_id: String,
    pub category_title: String,
    /// The explicit clause value or the normalized query token that matched.
    pub matched: String,
    pub cleaned_query: String,
    pub source: MatchSource,
}

/// Acronym seen in a query that no category or dictionary entry knows yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownAcronym {
    pub portal: String,
    pub acronym: String,
    pub context_query: String,
    pub frequency: u32,
    pub last_seen: DateTime<Utc>,
    #[serde(default)]
    pub reviewed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_to_category_id: Option<String>,
}
