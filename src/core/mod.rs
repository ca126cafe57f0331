pub mod acronyms;
pub mod aliases;
pub mod catalog;
pub mod explicit;
pub mod fuzzy;
pub mod ingest;
pub mod normalize;
pub mod resolver;

pub use crate::domain::model::{
    AcronymEntry, Category, CategoryRow, MatchSource, ResolutionOutcome, UnknownAcronym,
};
pub use crate::domain::ports::CategoryStore;
pub use crate::utils::error::Result;
