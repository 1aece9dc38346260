pub mod models;
pub mod counter;
pub mod aggregator;

pub use models::{DashboardStats, Event, ProductClickStat, SearchTermStat};
pub use counter::RankedCounter;
pub use aggregator::{AnalyticsAggregator, DEFAULT_TOP_N, DEFAULT_WINDOW, DELETED_PRODUCT_LABEL};
