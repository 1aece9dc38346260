pub mod product;
pub mod pricing;
pub mod filter;

pub use product::{CatalogEntry, EffectiveProduct, Product, Tenant};
pub use filter::{FilterCriteria, FilterError, FilterParams, SearchFilterEngine, ALL_CATEGORIES};
