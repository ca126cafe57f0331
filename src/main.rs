use anyhow::Context;
use category_resolver::core::{catalog, ingest};
use category_resolver::utils::{logger, validation::Validate};
use category_resolver::{CategoryStore, CliConfig, Command, JsonFileStore, ResolverConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {:#}", e);
        if let Some(resolver_error) = e.downcast_ref::<category_resolver::ResolverError>() {
            eprintln!("💡 Suggestion: {}", resolver_error.recovery_suggestion());
        }
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ResolverConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => ResolverConfig::default(),
    };
    config.validate().context("configuration validation failed")?;

    let store = JsonFileStore::new(config.store_path(&cli.store)?);
    let portal = config.portal(&cli.portal)?;
    let resolver = config.resolver();

    match &cli.command {
        Command::Resolve { query } => {
            let categories = store.load_categories(portal).await?;
            tracing::debug!("Loaded {} categories for {}", categories.len(), portal);
            let outcome = resolver.resolve(query, &categories);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Ingest { settings_file } => {
            let payload = tokio::fs::read_to_string(settings_file)
                .await
                .with_context(|| format!("failed to read {}", settings_file))?;
            let fresh =
                ingest::categories_from_site_settings(portal, &payload, resolver.dictionary())?;
            let stored = catalog::upsert_categories(&store, portal, fresh).await?;
            println!("✅ {} categories stored for {}", stored.len(), portal);
        }
        Command::Promote { category, alias } => {
            let promoted = catalog::promote_alias(&store, portal, category, alias).await?;
            println!("{}", serde_json::to_string_pretty(&promoted)?);
        }
        Command::Acronyms { query } => {
            let unknown = catalog::record_unknown_acronyms(
                &store,
                portal,
                query,
                resolver.dictionary(),
                chrono::Utc::now(),
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&unknown)?);
        }
    }

    Ok(())
}
