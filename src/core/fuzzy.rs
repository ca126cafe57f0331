use crate::core::normalize::{collapse_whitespace, remove_whole_word, stem, tokenize};
use crate::domain::model::{Category, MatchSource, ResolutionOutcome};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Length-dependent edit-distance tolerance for alias matching.
///
/// Aliases up to `exact_max_len` letters must match exactly. Aliases of at
/// least `wide_min_len` letters accept `wide_distance` edits, everything in
/// between accepts `narrow_distance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTolerance {
    pub exact_max_len: usize,
    pub wide_min_len: usize,
    pub narrow_distance: usize,
    pub wide_distance: usize,
}

impl Default for MatchTolerance {
    fn default() -> Self {
        Self {
            exact_max_len: 4,
            wide_min_len: 8,
            narrow_distance: 1,
            wide_distance: 2,
        }
    }
}

impl MatchTolerance {
    pub fn max_distance(&self, alias_len: usize) -> usize {
        if alias_len <= self.exact_max_len {
            0
        } else if alias_len >= self.wide_min_len {
            self.wide_distance
        } else {
            self.narrow_distance
        }
    }

    pub fn accepts(&self, token: &str, alias: &str) -> bool {
        if alias.is_empty() {
            return false;
        }
        let alias_len = alias.chars().count();
        let allowed = self.max_distance(alias_len);
        if allowed == 0 {
            return token == alias;
        }
        // The length gap is a lower bound on the distance.
        if token.chars().count().abs_diff(alias_len) > allowed {
            return false;
        }
        levenshtein(token, alias) <= allowed
    }

    /// True when the token is within tolerance of the alias or of its stem.
    fn matches_alias(&self, token: &str, alias: &str) -> bool {
        self.accepts(token, alias) || stem(alias).is_some_and(|stem| self.accepts(token, stem))
    }
}

/// Classic full-matrix Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

/// Matches query tokens against category aliases.
///
/// Tokens are scanned left to right and, per token, categories in list order;
/// the first hit wins. The raw surface form of the matched token is removed
/// from the query wherever it occurs as a whole word.
pub fn fuzzy_resolve(
    query: &str,
    categories: &[Category],
    tolerance: &MatchTolerance,
) -> Option<ResolutionOutcome> {
    fuzzy_resolve_with_clause(query, categories, tolerance, None)
}

/// Like [`fuzzy_resolve`], for a query that still carries an unresolved
/// explicit clause at `clause`. When the matched token lies inside that
/// clause, the whole clause is cut from the cleaned query together with the
/// token, so no bare `kategori:` label is left behind.
pub fn fuzzy_resolve_with_clause(
    query: &str,
    categories: &[Category],
    tolerance: &MatchTolerance,
    clause: Option<Range<usize>>,
) -> Option<ResolutionOutcome> {
    let tokens = tokenize(query);

    let (token, category) = tokens.iter().find_map(|token| {
        categories
            .iter()
            .find(|category| {
                category
                    .aliases()
                    .iter()
                    .any(|alias| tolerance.matches_alias(&token.text, alias))
            })
            .map(|category| (token, category))
    })?;

    let surface = token.surface(query);
    let cleaned_query = match clause {
        Some(clause) if clause.start <= token.start && token.end <= clause.end => {
            let cut = format!("{}{}", &query[..clause.start], &query[clause.end..]);
            remove_whole_word(&cut, surface).unwrap_or_else(|| collapse_whitespace(&cut))
        }
        _ => remove_whole_word(query, surface).unwrap_or_else(|| {
            collapse_whitespace(&format!("{} {}", &query[..token.start], &query[token.end..]))
        }),
    };

    tracing::debug!(
        token = %token.text,
        surface = %surface,
        category_id = %category.category_id(),
        "fuzzy category match"
    );

    Some(ResolutionOutcome {
        category_id: category.category_id().to_string(),
        category_title: category.title().to_string(),
        matched: token.text.clone(),
        cleaned_query,
        source: MatchSource::Fuzzy,
    })
}
