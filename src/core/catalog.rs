use crate::core::acronyms::{unknown_acronyms, AcronymDictionary};
use crate::core::CategoryStore;
use crate::domain::model::{Category, UnknownAcronym};
use crate::utils::error::{ResolverError, Result};
use chrono::{DateTime, Utc};

/// Merges freshly synced categories into the stored list for `portal`.
/// Existing rows keep their aliases; new rows are appended in input order.
pub async fn upsert_categories<S: CategoryStore>(
    store: &S,
    portal: &str,
    fresh: Vec<Category>,
) -> Result<Vec<Category>> {
    let mut stored = store.load_categories(portal).await?;
    let mut added = 0usize;

    for category in fresh {
        match stored
            .iter_mut()
            .find(|existing| existing.category_id() == category.category_id())
        {
            Some(existing) => existing.merge(category),
            None => {
                stored.push(category);
                added += 1;
            }
        }
    }

    store.save_categories(portal, &stored).await?;
    tracing::info!(portal = %portal, total = stored.len(), added, "categories upserted");
    Ok(stored)
}

/// Adds `alias` to a stored category and marks matching acronym observations
/// as reviewed. An alias that is already present is not saved again, but
/// matching observations are still marked.
pub async fn promote_alias<S: CategoryStore>(
    store: &S,
    portal: &str,
    category_id: &str,
    alias: &str,
) -> Result<Category> {
    let mut categories = store.load_categories(portal).await?;
    let category = categories
        .iter_mut()
        .find(|category| category.category_id() == category_id)
        .ok_or_else(|| ResolverError::CategoryNotFound {
            portal: portal.to_string(),
            category_id: category_id.to_string(),
        })?;

    let added = category.add_alias(alias);
    let promoted = category.clone();
    if added {
        store.save_categories(portal, &categories).await?;
    } else {
        tracing::debug!(alias = %alias, category_id = %category_id, "alias already present");
    }

    let mut observations = store.load_unknown_acronyms(portal).await?;
    let mut reviewed = 0usize;
    for observation in observations
        .iter_mut()
        .filter(|observation| observation.acronym.eq_ignore_ascii_case(alias.trim()))
    {
        observation.reviewed = true;
        observation.mapped_to_category_id = Some(category_id.to_string());
        reviewed += 1;
    }
    if reviewed > 0 {
        store.save_unknown_acronyms(portal, &observations).await?;
    }

    tracing::info!(
        portal = %portal,
        category_id = %category_id,
        alias = %alias,
        reviewed,
        "alias promoted"
    );
    Ok(promoted)
}

/// Detects acronyms in `query` that nothing resolves and records them,
/// bumping frequency for ones seen before. Returns the acronyms found.
pub async fn record_unknown_acronyms<S: CategoryStore>(
    store: &S,
    portal: &str,
    query: &str,
    dictionary: &AcronymDictionary,
    seen_at: DateTime<Utc>,
) -> Result<Vec<String>> {
    let categories = store.load_categories(portal).await?;
    let unknown = unknown_acronyms(query, &categories, dictionary);
    if unknown.is_empty() {
        return Ok(unknown);
    }

    let mut observations = store.load_unknown_acronyms(portal).await?;
    for acronym in &unknown {
        match observations
            .iter_mut()
            .find(|observation| &observation.acronym == acronym)
        {
            Some(observation) => {
                observation.frequency += 1;
                observation.last_seen = seen_at;
            }
            None => observations.push(UnknownAcronym {
                portal: portal.to_string(),
                acronym: acronym.clone(),
                context_query: query.to_string(),
                frequency: 1,
                last_seen: seen_at,
                reviewed: false,
                mapped_to_category_id: None,
            }),
        }
    }

    store.save_unknown_acronyms(portal, &observations).await?;
    tracing::debug!(portal = %portal, acronyms = ?unknown, "unknown acronyms recorded");
    Ok(unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStore {
        categories: Arc<Mutex<HashMap<String, Vec<Category>>>>,
        acronyms: Arc<Mutex<HashMap<String, Vec<UnknownAcronym>>>>,
    }

    impl CategoryStore for MockStore {
        async fn load_categories(&self, portal: &str) -> Result<Vec<Category>> {
            let categories = self.categories.lock().await;
            Ok(categories.get(portal).cloned().unwrap_or_default())
        }

        async fn save_categories(&self, portal: &str, categories: &[Category]) -> Result<()> {
            let mut stored = self.categories.lock().await;
            stored.insert(portal.to_string(), categories.to_vec());
            Ok(())
        }

        async fn load_unknown_acronyms(&self, portal: &str) -> Result<Vec<UnknownAcronym>> {
            let acronyms = self.acronyms.lock().await;
            Ok(acronyms.get(portal).cloned().unwrap_or_default())
        }

        async fn save_unknown_acronyms(
            &self,
            portal: &str,
            acronyms: &[UnknownAcronym],
        ) -> Result<()> {
            let mut stored = self.acronyms.lock().await;
            stored.insert(portal.to_string(), acronyms.to_vec());
            Ok(())
        }
    }

    const PORTAL: &str = "mfkn.naevneneshus.dk";

    #[tokio::test]
    async fn test_upsert_keeps_curated_aliases() {
        let store = MockStore::default();
        store
            .save_categories(
                PORTAL,
                &[Category::with_aliases(PORTAL, "1", "Skovloven", ["SL", "skov"])],
            )
            .await
            .unwrap();

        let fresh = vec![
            Category::new::<&str>(PORTAL, "1", "Skovloven", &[]),
            Category::new::<&str>(PORTAL, "2", "Planloven", &[]),
        ];
        let stored = upsert_categories(&store, PORTAL, fresh).await.unwrap();

        assert_eq!(stored.len(), 2);
        assert!(stored[0].has_alias("skov"));
        assert!(stored[0].has_alias("sl"));
        assert_eq!(stored[1].category_id(), "2");
    }

    #[tokio::test]
    async fn test_promote_unknown_category_fails() {
        let store = MockStore::default();
        let err = promote_alias(&store, PORTAL, "missing", "XYZ").await.unwrap_err();
        assert!(matches!(err, ResolverError::CategoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_then_promote() {
        let store = MockStore::default();
        let dictionary = AcronymDictionary::environment_and_planning();
        store
            .save_categories(PORTAL, &[Category::new::<&str>(PORTAL, "9", "Vejloven", &[])])
            .await
            .unwrap();

        let first = Utc::now();
        let found = record_unknown_acronyms(&store, PORTAL, "VEJL og MBL", &dictionary, first)
            .await
            .unwrap();
        assert_eq!(found, vec!["VEJL"]);

        record_unknown_acronyms(&store, PORTAL, "mere VEJL", &dictionary, Utc::now())
            .await
            .unwrap();
        let observations = store.load_unknown_acronyms(PORTAL).await.unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].frequency, 2);
        assert_eq!(observations[0].context_query, "VEJL og MBL");

        let promoted = promote_alias(&store, PORTAL, "9", "VEJL").await.unwrap();
        assert!(promoted.has_alias("vejl"));

        let observations = store.load_unknown_acronyms(PORTAL).await.unwrap();
        assert!(observations[0].reviewed);
        assert_eq!(observations[0].mapped_to_category_id.as_deref(), Some("9"));

        let found = record_unknown_acronyms(&store, PORTAL, "VEJL", &dictionary, Utc::now())
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_promote_existing_alias_marks_observations() {
        let store = MockStore::default();
        let dictionary = AcronymDictionary::environment_and_planning();
        store
            .save_categories(PORTAL, &[Category::new::<&str>(PORTAL, "9", "Vejloven", &[])])
            .await
            .unwrap();
        record_unknown_acronyms(&store, PORTAL, "VEJL sag", &dictionary, Utc::now())
            .await
            .unwrap();

        // Alias added out of band before the observation is reviewed.
        store
            .save_categories(
                PORTAL,
                &[Category::new(PORTAL, "9", "Vejloven", &["vejl"])],
            )
            .await
            .unwrap();

        let promoted = promote_alias(&store, PORTAL, "9", "VEJL").await.unwrap();
        assert!(promoted.has_alias("vejl"));

        let observations = store.load_unknown_acronyms(PORTAL).await.unwrap();
        assert_eq!(observations.len(), 1);
        assert!(observations[0].reviewed);
        assert_eq!(observations[0].mapped_to_category_id.as_deref(), Some("9"));
    }
}
