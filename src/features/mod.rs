mod builder;
pub mod catalog;
mod types;

pub use builder::{build_vector, unmatched_columns};
pub use catalog::CategoricalDomain;
pub use types::*;
