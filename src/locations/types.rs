use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitorDensity {
    Low,
    Medium,
    High,
}

/// Share of local businesses active on each platform, as fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaStats {
    pub linkedin_penetration: f64,
    pub instagram_penetration: f64,
    pub facebook_penetration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub slug: String,
    pub abbreviation: String,
    /// regional multiplier around 1.0 applied to spend and ROI estimates
    pub marketing_spend_index: f64,
    #[serde(default)]
    pub business_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// stable identifier, also the seed for deterministic copy selection
    pub slug: String,
    pub state_slug: String,
    #[serde(default)]
    pub top_industries: Vec<String>,
    pub business_count: u64,
    pub growth_rate: f64,
    pub competitor_density: CompetitorDensity,
    pub social_media_stats: SocialMediaStats,
}

impl City {
    pub fn primary_industry(&self) -> Option<&str> {
        self.top_industries.first().map(String::as_str)
    }

    pub fn shares_industry_with(&self, other: &City) -> bool {
        self.top_industries
            .iter()
            .any(|industry| other.top_industries.contains(industry))
    }
}
