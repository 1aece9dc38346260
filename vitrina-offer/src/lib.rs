pub mod models;
pub mod rules;
pub mod resolver;

pub use models::{Campaign, CampaignBinding, CampaignItem, FeaturedCampaign};
pub use rules::TieBreakPolicy;
pub use resolver::OfferResolver;
