pub mod models;
pub mod pii;
pub mod tenant;

pub use pii::Masked;
pub use tenant::TenantId;
