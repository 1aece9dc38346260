pub mod repository;
pub mod storefront;

pub use repository::{CampaignStore, CatalogStore, EventStore, StoreError, StoreResult};
pub use storefront::{Storefront, StorefrontPage};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Tracking failed: {0}")]
    TrackingFailure(String),
}

impl From<vitrina_catalog::FilterError> for CoreError {
    fn from(err: vitrina_catalog::FilterError) -> Self {
        CoreError::ValidationError(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
