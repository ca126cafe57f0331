use crate::core::acronyms::AcronymDictionary;
use crate::core::explicit::{clause_span, parse_explicit_category};
use crate::core::fuzzy::{fuzzy_resolve_with_clause, MatchTolerance};
use crate::domain::model::{Category, ResolutionOutcome};

/// Explicit clause first, fuzzy token matching second.
///
/// Only one path ever produces the outcome: when the explicit clause
/// resolves, the fuzzy matcher is not run on the cleaned query. When the
/// clause is present but unresolvable the fuzzy matcher scans it like any
/// other text. If the fuzzy match comes from inside the clause, the whole
/// clause is cut from the cleaned query; otherwise the clause stays.
pub fn resolve(
    raw_query: &str,
    categories: &[Category],
    dictionary: &AcronymDictionary,
    tolerance: &MatchTolerance,
) -> Option<ResolutionOutcome> {
    parse_explicit_category(raw_query, categories, dictionary)
        .or_else(|| {
            fuzzy_resolve_with_clause(raw_query, categories, tolerance, clause_span(raw_query))
        })
}

/// Resolver configured for one legal domain. Holds no per-query state and
/// can be shared across requests.
#[derive(Debug, Clone)]
pub struct Resolver {
    dictionary: AcronymDictionary,
    tolerance: MatchTolerance,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(
            AcronymDictionary::environment_and_planning(),
            MatchTolerance::default(),
        )
    }
}

impl Resolver {
    pub fn new(dictionary: AcronymDictionary, tolerance: MatchTolerance) -> Self {
        Self {
            dictionary,
            tolerance,
        }
    }

    pub fn dictionary(&self) -> &AcronymDictionary {
        &self.dictionary
    }

    pub fn tolerance(&self) -> &MatchTolerance {
        &self.tolerance
    }

    pub fn resolve(&self, raw_query: &str, categories: &[Category]) -> Option<ResolutionOutcome> {
        resolve(raw_query, categories, &self.dictionary, &self.tolerance)
    }
}
