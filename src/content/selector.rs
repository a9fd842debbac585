//! Deterministic copy selection for location pages.
//!
//! Every function here is pure: the same city and date context always give
//! the same text, which keeps statically generated pages stable.

use serde::Serialize;

use crate::content::date::DateContext;
use crate::content::tables::{
    seasonal_tips, DEFAULT_INDUSTRY_CONTENT, INDUSTRY_CONTENT, QUARTERLY_TRENDS, WEEKLY_TIPS,
};
use crate::helpers::format::{format_number, format_percent};
use crate::locations::{City, CompetitorDensity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyTip {
    pub week: u32,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterlyFocus {
    pub quarter: u32,
    pub title: &'static str,
    pub focus: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryContent {
    pub topics: Vec<&'static str>,
    pub content_types: Vec<&'static str>,
}

/// Tip for the city's primary industry in the current season, or the
/// season's default.
pub fn seasonal_tip(city: &City, date: &DateContext) -> &'static str {
    seasonal_tips(date.season).lookup(city.primary_industry())
}

pub fn weekly_tip(date: &DateContext) -> WeeklyTip {
    weekly_tip_for_week(date.week)
}

/// Week 53 wraps around to the first tip.
pub fn weekly_tip_for_week(week: u32) -> WeeklyTip {
    let index = (week.max(1) - 1) as usize % WEEKLY_TIPS.len();
    WeeklyTip {
        week,
        tip: WEEKLY_TIPS[index],
    }
}

pub fn quarterly_focus(date: &DateContext) -> QuarterlyFocus {
    let quarter = date.quarter.clamp(1, 4);
    let trend = &QUARTERLY_TRENDS[(quarter - 1) as usize];
    QuarterlyFocus {
        quarter,
        title: trend.title,
        focus: trend.focus.to_vec(),
    }
}

/// One of four taglines, picked by slug length so a city keeps its tagline
/// across builds.
pub fn hero_tagline(city: &City, date: &DateContext) -> String {
    const TAGLINE_COUNT: usize = 4;

    match city.slug.len() % TAGLINE_COUNT {
        0 => format!(
            "Join {} {} businesses automating their social media in {}",
            format_number(city.business_count),
            city.name,
            date.year
        ),
        1 => format!(
            "The #1 AI content platform trusted by {} {} businesses",
            city.name,
            primary_industry_lowercase(city)
        ),
        2 => format!(
            "{} of {} businesses are on Instagram. Are you reaching them?",
            format_percent(city.social_media_stats.instagram_penetration),
            city.name
        ),
        _ => format!(
            "{}'s fastest-growing businesses use AI for content creation",
            city.name
        ),
    }
}

pub fn competitor_insight(city: &City, date: &DateContext) -> String {
    match city.competitor_density {
        CompetitorDensity::High => format!(
            "In {}, {}'s competitive market demands consistent, high-quality content. AI automation helps you stay ahead while competitors struggle to keep up.",
            date.year, city.name
        ),
        CompetitorDensity::Medium => format!(
            "{}'s growing market presents a prime opportunity. Early adopters of AI content tools are capturing market share faster in {}.",
            city.name, date.year
        ),
        CompetitorDensity::Low => format!(
            "{}'s emerging market means less competition for attention. Establish your brand presence now with consistent AI-powered content.",
            city.name
        ),
    }
}

pub fn industry_content(industry: &str) -> IndustryContent {
    let table = INDUSTRY_CONTENT
        .iter()
        .find(|(key, _)| *key == industry)
        .map(|(_, table)| table)
        .unwrap_or(&DEFAULT_INDUSTRY_CONTENT);
    IndustryContent {
        topics: table.topics.to_vec(),
        content_types: table.content_types.to_vec(),
    }
}

/// Primary industry for use mid-sentence; "local" when the city lists none.
pub(crate) fn primary_industry_lowercase(city: &City) -> String {
    city.primary_industry().unwrap_or("local").to_lowercase()
}
