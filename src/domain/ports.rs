use crate::domain::model::{Category, UnknownAcronym};
use crate::utils::error::Result;

/// Portal-scoped persistence for categories and acronym observations.
pub trait CategoryStore: Send + Sync {
    fn load_categories(
        &self,
        portal: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Category>>> + Send;
    fn save_categories(
        &self,
        portal: &str,
        categories: &[Category],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn load_unknown_acronyms(
        &self,
        portal: &str,
    ) -> impl std::future::Future<Output = Result<Vec<UnknownAcronym>>> + Send;
    fn save_unknown_acronyms(
        &self,
        portal: &str,
        acronyms: &[UnknownAcronym],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
