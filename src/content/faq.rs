use serde::Serialize;

use crate::content::date::DateContext;
use crate::content::estimates::{roi_estimate, time_saved_estimate};
use crate::content::selector::primary_industry_lowercase;
use crate::helpers::format::format_percent;
use crate::locations::{City, State};
use crate::utils::constants::BRAND_NAME;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// The five city FAQ entries, always in the same order.
pub fn location_faqs(city: &City, state: &State, date: &DateContext) -> Vec<Faq> {
    let industry = primary_industry_lowercase(city);
    let time_saved = time_saved_estimate(city);
    let social = &city.social_media_stats;

    vec![
        Faq {
            question: format!("Is {BRAND_NAME} available for businesses in {}, {}?", city.name, state.abbreviation),
            answer: format!(
                "Absolutely! {BRAND_NAME} serves businesses throughout {} and all of {}. Our AI-powered platform works for any business looking to automate their social media content creation and scheduling.",
                city.name, state.name
            ),
        },
        Faq {
            question: format!("How does {BRAND_NAME} help {} businesses in {}?", industry, city.name),
            answer: format!(
                "Our AI understands industry-specific content needs. For {}'s {} sector, we generate relevant content, suggest optimal posting times for your local audience, and help you maintain consistent brand presence across all platforms.",
                city.name, industry
            ),
        },
        Faq {
            question: format!("What makes {BRAND_NAME} different for {} businesses?", city.name),
            answer: format!(
                "While our AI platform works globally, we understand that {} businesses need content that resonates locally. Our tools help you create content that connects with your {} audience while saving {} per week on content creation.",
                city.name, state.name, time_saved
            ),
        },
        Faq {
            question: format!("How much can {} businesses save with AI content automation?", city.name),
            answer: format!(
                "Based on current {} data, {} businesses using {BRAND_NAME} report saving an average of {} per week on content creation, with an average ROI of {} from improved social media performance.",
                date.year,
                city.name,
                time_saved,
                roi_estimate(city, state)
            ),
        },
        Faq {
            question: format!("Does {BRAND_NAME} work with all social media platforms popular in {}?", city.name),
            answer: format!(
                "Yes! We support LinkedIn (used by {} of {} businesses), Instagram ({}), Facebook ({}), and Twitter/X. Create once, publish everywhere.",
                format_percent(social.linkedin_penetration),
                city.name,
                format_percent(social.instagram_penetration),
                format_percent(social.facebook_penetration)
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::CompetitorDensity;
    use crate::tests::common::{city, date_in, state};

    #[test]
    fn five_entries_with_location_facts() {
        let mut c = city("austin", "texas");
        c.name = "Austin".into();
        c.top_industries = vec!["Technology".into()];
        c.competitor_density = CompetitorDensity::High;
        c.social_media_stats.linkedin_penetration = 0.71;
        let mut s = state("texas", 1.0);
        s.name = "Texas".into();
        s.abbreviation = "TX".into();

        let faqs = location_faqs(&c, &s, &date_in(2025, 9, 1));

        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[0].question, "Is KontentFire available for businesses in Austin, TX?");
        assert!(faqs[1].question.contains("technology businesses in Austin"));
        assert!(faqs[2].answer.contains("saving 12+ hours per week"));
        assert!(faqs[3].answer.contains("Based on current 2025 data"));
        assert!(faqs[3].answer.contains("average ROI of 340%"));
        assert!(faqs[4].answer.contains("used by 71% of Austin businesses"));
    }
}
