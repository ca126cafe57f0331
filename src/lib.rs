pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Command, CliConfig};

pub use config::{local_store::JsonFileStore, toml_config::ResolverConfig};
pub use core::acronyms::AcronymDictionary;
pub use core::aliases::build_aliases;
pub use core::explicit::parse_explicit_category;
pub use core::fuzzy::{fuzzy_resolve, fuzzy_resolve_with_clause, MatchTolerance};
pub use core::normalize::normalize;
pub use core::resolver::{resolve, Resolver};
pub use domain::model::{AcronymEntry, Category, MatchSource, ResolutionOutcome, UnknownAcronym};
pub use domain::ports::CategoryStore;
pub use utils::error::{ResolverError, Result};
