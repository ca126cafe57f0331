use crate::core::normalize::normalize;
use crate::domain::model::{Category, CategoryRow};
use std::collections::BTreeSet;

/// Normalized, squashed and initials forms of `name`, merged with the same
/// expansion of every entry in `extra`.
///
/// Initials are only produced for names of two or more words, and only when
/// they are longer than one letter. Empty forms are never added.
pub fn build_aliases<S: AsRef<str>>(name: &str, extra: &[S]) -> BTreeSet<String> {
    let mut aliases = BTreeSet::new();
    expand_into(name, &mut aliases);
    for alias in extra {
        expand_into(alias.as_ref(), &mut aliases);
    }
    aliases
}

fn expand_into(name: &str, aliases: &mut BTreeSet<String>) {
    let base = normalize(name);
    if base.is_empty() {
        return;
    }

    let squashed: String = base.split(' ').collect();
    let words: Vec<&str> = base.split(' ').collect();

    if words.len() > 1 {
        let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
        if initials.len() > 1 {
            aliases.insert(initials);
        }
    }

    aliases.insert(squashed);
    aliases.insert(base);
}

impl Category {
    /// Builds a category and derives its aliases from the title and `extra`.
    pub fn new<S: AsRef<str>>(
        portal_id: impl Into<String>,
        category_id: impl Into<String>,
        title: impl Into<String>,
        extra: &[S],
    ) -> Self {
        let title = title.into();
        let aliases = build_aliases(&title, extra);
        Self::assemble(portal_id.into(), category_id.into(), title, aliases)
    }

    /// Builds a category from an alias list taken as-is (only normalized,
    /// no squashed or initials expansion), e.g. a store row.
    pub fn with_aliases<I, S>(
        portal_id: impl Into<String>,
        category_id: impl Into<String>,
        title: impl Into<String>,
        aliases: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|alias| normalize(alias.as_ref()))
            .filter(|alias| !alias.is_empty())
            .collect();
        Self::assemble(portal_id.into(), category_id.into(), title.into(), aliases)
    }

    fn assemble(
        portal_id: String,
        category_id: String,
        title: String,
        mut aliases: BTreeSet<String>,
    ) -> Self {
        let base = normalize(&title);
        if !base.is_empty() {
            aliases.insert(base);
        }
        Self {
            portal_id,
            category_id,
            title,
            aliases,
        }
    }

    /// Adds one alias in normalized form. Returns `false` when it normalizes
    /// to nothing or is already present.
    pub fn add_alias(&mut self, alias: &str) -> bool {
        let normalized = normalize(alias);
        if normalized.is_empty() {
            return false;
        }
        self.aliases.insert(normalized)
    }

    /// Folds another snapshot of the same category into this one: the other
    /// title wins, aliases are unioned.
    pub fn merge(&mut self, other: Category) {
        self.title = other.title;
        self.aliases.extend(other.aliases);
        let base = normalize(&self.title);
        if !base.is_empty() {
            self.aliases.insert(base);
        }
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::with_aliases(row.portal, row.category_id, row.category_title, row.aliases)
    }
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        CategoryRow {
            portal: category.portal_id,
            category_id: category.category_id,
            category_title: category.title,
            aliases: category.aliases.into_iter().collect(),
        }
    }
}
