pub mod dataset;
pub mod types;

pub use dataset::LocationDataset;
pub use types::{City, CompetitorDensity, SocialMediaStats, State};
