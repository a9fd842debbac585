use serde::Serialize;

use crate::content::date::DateContext;
use crate::content::estimates::{city_stats, CityStats};
use crate::content::faq::{location_faqs, Faq};
use crate::content::selector::{
    competitor_insight, hero_tagline, industry_content, quarterly_focus, seasonal_tip, weekly_tip,
    IndustryContent, QuarterlyFocus, WeeklyTip,
};
use crate::locations::{City, State};

/// Everything a city page shows, computed for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationContent {
    pub city: String,
    pub state: String,
    pub date: DateContext,
    pub hero_tagline: String,
    pub seasonal_tip: &'static str,
    pub weekly_tip: WeeklyTip,
    pub quarterly_focus: QuarterlyFocus,
    pub competitor_insight: String,
    pub industry_content: IndustryContent,
    pub stats: CityStats,
    pub faqs: Vec<Faq>,
}

impl LocationContent {
    pub fn build(city: &City, state: &State, date: &DateContext) -> Self {
        Self {
            city: city.name.clone(),
            state: state.name.clone(),
            date: date.clone(),
            hero_tagline: hero_tagline(city, date),
            seasonal_tip: seasonal_tip(city, date),
            weekly_tip: weekly_tip(date),
            quarterly_focus: quarterly_focus(date),
            competitor_insight: competitor_insight(city, date),
            industry_content: industry_content(city.primary_industry().unwrap_or_default()),
            stats: city_stats(city, state, date),
            faqs: location_faqs(city, state, date),
        }
    }
}
