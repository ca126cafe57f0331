use crate::core::CategoryStore;
use crate::domain::model::{Category, UnknownAcronym};
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File-backed [`CategoryStore`]: one JSON array per portal and table under
/// `base_path`. Missing files read as empty tables.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn table_path(&self, portal: &str, table: &str) -> PathBuf {
        let file_name: String = portal
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{}.{}.json", file_name, table))
    }

    async fn read_table<T: DeserializeOwned>(&self, path: &Path) -> Result<Vec<T>> {
        match tokio::fs::read(path).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No table at {}, starting empty", path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_table<T: Serialize>(&self, path: &Path, rows: &[T]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(rows)?;
        tokio::fs::write(path, data).await?;
        tracing::debug!("Wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }
}

impl CategoryStore for JsonFileStore {
    async fn load_categories(&self, portal: &str) -> Result<Vec<Category>> {
        self.read_table(&self.table_path(portal, "categories")).await
    }

    async fn save_categories(&self, portal: &str, categories: &[Category]) -> Result<()> {
        self.write_table(&self.table_path(portal, "categories"), categories)
            .await
    }

    async fn load_unknown_acronyms(&self, portal: &str) -> Result<Vec<UnknownAcronym>> {
        self.read_table(&self.table_path(portal, "unknown_acronyms"))
            .await
    }

    async fn save_unknown_acronyms(&self, portal: &str, acronyms: &[UnknownAcronym]) -> Result<()> {
        self.write_table(&self.table_path(portal, "unknown_acronyms"), acronyms)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_table_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load_categories("mfkn.naevneneshus.dk").await.unwrap().is_empty());
        assert!(store
            .load_unknown_acronyms("mfkn.naevneneshus.dk")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_rows_are_normalized_on_read() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let raw = serde_json::json!([
            {
                "portal": "mfkn.naevneneshus.dk",
                "category_id": "5",
                "category_title": "Råstofloven",
                "aliases": ["RL", "", "Råstof"]
            }
        ]);
        std::fs::write(
            dir.path().join("mfkn.naevneneshus.dk.categories.json"),
            serde_json::to_vec(&raw).unwrap(),
        )
        .unwrap();

        let categories = store.load_categories("mfkn.naevneneshus.dk").await.unwrap();
        assert_eq!(categories.len(), 1);
        let aliases: Vec<&str> = categories[0].aliases().iter().map(String::as_str).collect();
        assert_eq!(aliases, vec!["rastof", "rastofloven", "rl"]);
    }

    #[tokio::test]
    async fn test_corrupt_table_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(dir.path().join("p.categories.json"), b"{not json").unwrap();
        assert!(store.load_categories("p").await.is_err());
    }

    #[test]
    fn test_portal_file_names_are_sanitized() {
        let store = JsonFileStore::new("/data");
        assert_eq!(
            store.table_path("../etc/passwd", "categories"),
            PathBuf::from("/data/.._etc_passwd.categories.json")
        );
    }
}
