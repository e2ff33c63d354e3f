pub mod filter;
pub mod inventory;
pub mod types;

pub use filter::{filter_and_rank, matches};
pub use inventory::Catalog;
pub use types::FilterCriteria;
