use crate::core::acronyms::AcronymDictionary;
use crate::core::fuzzy::MatchTolerance;
use crate::core::resolver::Resolver;
use crate::domain::model::AcronymEntry;
use crate::utils::error::{ResolverError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub fuzzy: MatchTolerance,
    /// Replaces the built-in acronym table when present.
    pub acronyms: Option<Vec<AcronymEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub default_portal: Option<String>,
}

impl ResolverConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ResolverError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ResolverError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(path) = &self.store.path {
            validation::validate_path("store.path", path)?;
        }

        let fuzzy = &self.fuzzy;
        validation::validate_range("fuzzy.exact_max_len", fuzzy.exact_max_len, 0, 16)?;
        validation::validate_range("fuzzy.wide_distance", fuzzy.wide_distance, 0, 8)?;
        if fuzzy.exact_max_len >= fuzzy.wide_min_len {
            return Err(ResolverError::ConfigValidationError {
                field: "fuzzy.wide_min_len".to_string(),
                message: format!(
                    "must be greater than exact_max_len ({})",
                    fuzzy.exact_max_len
                ),
            });
        }
        if fuzzy.narrow_distance > fuzzy.wide_distance {
            return Err(ResolverError::ConfigValidationError {
                field: "fuzzy.narrow_distance".to_string(),
                message: format!(
                    "must not exceed wide_distance ({})",
                    fuzzy.wide_distance
                ),
            });
        }

        for entry in self.acronyms.iter().flatten() {
            validation::validate_acronym("acronyms.acronym", &entry.acronym)?;
            validation::validate_non_empty_string("acronyms.title", &entry.title)?;
        }

        Ok(())
    }

    pub fn dictionary(&self) -> AcronymDictionary {
        match &self.acronyms {
            Some(entries) => AcronymDictionary::new(entries.clone()),
            None => AcronymDictionary::environment_and_planning(),
        }
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.dictionary(), self.fuzzy)
    }

    /// The command line value wins over the file.
    pub fn store_path<'a>(&'a self, override_path: &'a Option<String>) -> Result<&'a str> {
        match override_path {
            Some(path) => Ok(path.as_str()),
            None => validation::validate_required_field("store.path", &self.store.path)
                .map(String::as_str),
        }
    }

    pub fn portal<'a>(&'a self, override_portal: &'a Option<String>) -> Result<&'a str> {
        match override_portal {
            Some(portal) => Ok(portal.as_str()),
            None => validation::validate_required_field(
                "store.default_portal",
                &self.store.default_portal,
            )
            .map(String::as_str),
        }
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
