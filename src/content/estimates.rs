use serde::Serialize;

use crate::content::date::DateContext;
use crate::helpers::format::{format_fixed, format_number, format_percent};
use crate::locations::{City, CompetitorDensity, State};

/// Yearly digital marketing spend of an average business, before the regional index.
const BASE_ANNUAL_SPEND: f64 = 12_500.0;

/// Hours per week saved, higher where competition forces more posting.
pub fn time_saved_hours(density: CompetitorDensity) -> u32 {
    match density {
        CompetitorDensity::High => 12,
        CompetitorDensity::Medium => 10,
        CompetitorDensity::Low => 8,
    }
}

pub fn time_saved_estimate(city: &City) -> String {
    format!("{}+ hours", time_saved_hours(city.competitor_density))
}

pub fn base_roi_percent(density: CompetitorDensity) -> u32 {
    match density {
        CompetitorDensity::High => 340,
        CompetitorDensity::Medium => 280,
        CompetitorDensity::Low => 220,
    }
}

pub fn roi_estimate(city: &City, state: &State) -> String {
    let adjusted = (f64::from(base_roi_percent(city.competitor_density)) * state.marketing_spend_index).round();
    format!("{}%", adjusted as i64)
}

/// Total yearly spend across the city's businesses: `1.2B`, `350M` or `800K`.
pub fn marketing_spend_estimate(city: &City, state: &State) -> String {
    let total = BASE_ANNUAL_SPEND * state.marketing_spend_index * city.business_count as f64;

    if total >= 1_000_000_000.0 {
        format!("{}B", format_fixed(total / 1_000_000_000.0, 1))
    } else if total >= 1_000_000.0 {
        format!("{}M", format_fixed(total / 1_000_000.0, 0))
    } else {
        format!("{}K", format_fixed(total / 1_000.0, 0))
    }
}

/// Headline numbers of a city page, preformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityStats {
    pub business_count: String,
    pub linkedin_active: String,
    pub instagram_active: String,
    pub facebook_active: String,
    pub marketing_spend: String,
    pub time_saved: String,
    pub projected_roi: String,
    pub growth_rate: String,
    pub year: i32,
}

pub fn city_stats(city: &City, state: &State, date: &DateContext) -> CityStats {
    let social = &city.social_media_stats;
    CityStats {
        business_count: format_number(city.business_count),
        linkedin_active: format_percent(social.linkedin_penetration),
        instagram_active: format_percent(social.instagram_penetration),
        facebook_active: format_percent(social.facebook_penetration),
        marketing_spend: marketing_spend_estimate(city, state),
        time_saved: time_saved_estimate(city),
        projected_roi: roi_estimate(city, state),
        growth_rate: format!("{}%", format_fixed(city.growth_rate * 100.0, 1)),
        year: date.year,
    }
}
