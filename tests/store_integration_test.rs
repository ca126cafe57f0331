use category_resolver::core::{catalog, ingest};
use category_resolver::{CategoryStore, JsonFileStore, MatchSource, ResolverConfig};
use tempfile::TempDir;

const PORTAL: &str = "mfkn.naevneneshus.dk";

const SITE_SETTINGS: &str = r#"{
    "topics": [
        {"id": "c-mbl", "title": "Miljøbeskyttelsesloven"},
        {"id": "c-nbl", "title": "Naturbeskyttelsesloven"},
        {"id": "c-makp", "title": "Miljøvurdering af konkrete projekter"},
        {"id": "c-vej", "title": "Vejloven"}
    ]
}"#;

#[tokio::test]
async fn test_ingest_resolve_promote_round() {
    let temp_dir = TempDir::new().unwrap();
    let config = ResolverConfig::from_toml_str(&format!(
        "[store]\npath = {:?}\ndefault_portal = {:?}\n",
        temp_dir.path().to_str().unwrap(),
        PORTAL
    ))
    .unwrap();

    let store = JsonFileStore::new(config.store_path(&None).unwrap());
    let resolver = config.resolver();

    // Ingest
    let fresh =
        ingest::categories_from_site_settings(PORTAL, SITE_SETTINGS, resolver.dictionary())
            .unwrap();
    let stored = catalog::upsert_categories(&store, PORTAL, fresh).await.unwrap();
    assert_eq!(stored.len(), 4);

    let full_path = temp_dir
        .path()
        .join("mfkn.naevneneshus.dk.categories.json");
    assert!(full_path.exists());

    // Resolve against the reloaded snapshot
    let categories = store.load_categories(PORTAL).await.unwrap();
    let outcome = resolver
        .resolve("MBL støj fra vindmøller", &categories)
        .unwrap();
    assert_eq!(outcome.category_id, "c-mbl");
    assert_eq!(outcome.source, MatchSource::Fuzzy);
    assert_eq!(outcome.cleaned_query, "støj fra vindmøller");

    let outcome = resolver
        .resolve("screening, kategori: MAKP", &categories)
        .unwrap();
    assert_eq!(outcome.category_id, "c-makp");
    assert_eq!(outcome.cleaned_query, "screening");

    // Unknown acronym observed, then promoted into an alias
    let unknown = catalog::record_unknown_acronyms(
        &store,
        PORTAL,
        "VEJL om overkørsel",
        resolver.dictionary(),
        chrono::Utc::now(),
    )
    .await
    .unwrap();
    assert_eq!(unknown, vec!["VEJL"]);
    assert!(resolver
        .resolve("VEJL om overkørsel", &store.load_categories(PORTAL).await.unwrap())
        .is_none());

    catalog::promote_alias(&store, PORTAL, "c-vej", "VEJL")
        .await
        .unwrap();

    let categories = store.load_categories(PORTAL).await.unwrap();
    let outcome = resolver
        .resolve("VEJL om overkørsel", &categories)
        .unwrap();
    assert_eq!(outcome.category_id, "c-vej");
    assert_eq!(outcome.cleaned_query, "om overkørsel");

    let observations = store.load_unknown_acronyms(PORTAL).await.unwrap();
    assert!(observations.iter().all(|o| o.reviewed));
}

#[tokio::test]
async fn test_resync_keeps_promoted_aliases() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());
    let resolver = category_resolver::Resolver::default();

    let fresh =
        ingest::categories_from_site_settings(PORTAL, SITE_SETTINGS, resolver.dictionary())
            .unwrap();
    catalog::upsert_categories(&store, PORTAL, fresh).await.unwrap();
    catalog::promote_alias(&store, PORTAL, "c-nbl", "natur")
        .await
        .unwrap();

    let fresh =
        ingest::categories_from_site_settings(PORTAL, SITE_SETTINGS, resolver.dictionary())
            .unwrap();
    let stored = catalog::upsert_categories(&store, PORTAL, fresh).await.unwrap();

    let nbl = stored
        .iter()
        .find(|category| category.category_id() == "c-nbl")
        .unwrap();
    assert!(nbl.has_alias("natur"));
    assert!(nbl.has_alias("nbl"));
}
