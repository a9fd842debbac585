//! Fixed copy tables for location pages.

use crate::content::date::Season;

/// Industry-keyed tips for one season plus the catch-all.
#[derive(Debug)]
pub struct SeasonalTips {
    pub by_industry: &'static [(&'static str, &'static str)],
    pub default: &'static str,
}

impl SeasonalTips {
    pub fn lookup(&self, industry: Option<&str>) -> &'static str {
        industry
            .and_then(|industry| {
                self.by_industry
                    .iter()
                    .find(|(key, _)| *key == industry)
                    .map(|(_, tip)| *tip)
            })
            .unwrap_or(self.default)
    }
}

static SPRING: SeasonalTips = SeasonalTips {
    by_industry: &[
        ("Technology", "Spring is perfect for launching new product features. Highlight innovation and fresh starts in your content."),
        ("Healthcare", "Promote wellness and preventive care as people become more active with warmer weather."),
        ("Tourism", "Capture the spring break travel surge with compelling destination content and early booking incentives."),
        ("Real Estate", "Spring buying season is here! Showcase new listings with outdoor photography and neighborhood highlights."),
        ("Finance", "Tax season follow-up: Help clients plan for the rest of the year with smart financial content."),
        ("Entertainment", "Festival season approaches - create buzz around upcoming events and ticket sales."),
        ("Retail", "Spring cleaning translates to spring buying. Highlight new arrivals and seasonal products."),
    ],
    default: "Spring brings renewal - refresh your content strategy with new themes and engagement tactics.",
};

static SUMMER: SeasonalTips = SeasonalTips {
    by_industry: &[
        ("Technology", "Back-to-school tech prep starts now. Target students and educators with relevant content."),
        ("Healthcare", "Summer safety content resonates - hydration tips, sun protection, and outdoor activity advice."),
        ("Tourism", "Peak travel season is here. Maximize engagement with stunning visual content and local experiences."),
        ("Real Estate", "Families want to move before school starts. Emphasize quick closings and family-friendly neighborhoods."),
        ("Finance", "Mid-year financial check-ins help clients stay on track. Share planning tips and market insights."),
        ("Entertainment", "Outdoor events and summer concerts drive engagement. Leverage FOMO with event content."),
        ("Retail", "Summer sales and back-to-school prep dominate. Create urgency with limited-time offers."),
    ],
    default: "Summer engagement can dip - use vibrant, snackable content to capture attention.",
};

static FALL: SeasonalTips = SeasonalTips {
    by_industry: &[
        ("Technology", "Major product launches happen in fall. Build anticipation with teaser content and early access offers."),
        ("Healthcare", "Flu season prep and open enrollment drive healthcare content. Be the trusted source."),
        ("Tourism", "Fall foliage and shoulder season deals attract travelers. Highlight unique autumn experiences."),
        ("Real Estate", "Motivated buyers remain active. Showcase cozy home features and investment opportunities."),
        ("Finance", "Year-end planning begins. Help clients with tax strategies and retirement contributions."),
        ("Entertainment", "Award season and holiday content planning starts. Build anticipation for upcoming releases."),
        ("Retail", "Holiday shopping prep begins earlier each year. Start Black Friday buzz by mid-fall."),
    ],
    default: "Fall is strategy season - plan your Q4 content calendar for maximum impact.",
};

static WINTER: SeasonalTips = SeasonalTips {
    by_industry: &[
        ("Technology", "CES and new year tech trends dominate. Position your brand as an industry thought leader."),
        ("Healthcare", "New year wellness resolutions drive engagement. Support healthy lifestyle content."),
        ("Tourism", "Winter escapes and holiday travel peak. Target both warm-weather getaways and ski destinations."),
        ("Real Estate", "Serious buyers shop in winter. Less competition means more motivated transactions."),
        ("Finance", "New year financial resolutions and tax prep content perform well. Help clients start strong."),
        ("Entertainment", "Award shows and winter releases create buzz. Leverage cultural moments."),
        ("Retail", "Post-holiday sales and new year refresh. Clear inventory and introduce new lines."),
    ],
    default: "Winter is planning season - set goals and establish your content themes for the year.",
};

pub fn seasonal_tips(season: Season) -> &'static SeasonalTips {
    match season {
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Fall => &FALL,
        Season::Winter => &WINTER,
    }
}

/// One tip per week of the year.
pub static WEEKLY_TIPS: [&str; 52] = [
    "Start your week by scheduling content for peak engagement times in your timezone.",
    "Use AI to generate multiple variations of your top-performing posts.",
    "Analyze last week's metrics to identify content themes that resonate.",
    "Engage with your audience's comments within the first hour of posting.",
    "Create a content pillar strategy focusing on your top 3 topics.",
    "Repurpose long-form content into social snippets for wider reach.",
    "Test different call-to-actions to see what drives more clicks.",
    "Use trending hashtags relevant to your industry this week.",
    "Share behind-the-scenes content to humanize your brand.",
    "Collaborate with complementary local businesses for cross-promotion.",
    "Create educational content that positions you as an industry expert.",
    "Run a quick poll to boost engagement and gather audience insights.",
    "Optimize your posting schedule based on when your audience is most active.",
    "Share customer success stories and testimonials.",
    "Create content addressing common questions in your industry.",
    "Use carousel posts to increase time spent on your content.",
    "Leverage local events and news in your content strategy.",
    "A/B test your headlines to improve click-through rates.",
    "Focus on video content - it typically gets 48% more views.",
    "Engage with industry influencers and thought leaders.",
    "Create a content series that keeps followers coming back.",
    "Use data-driven insights to refine your target audience.",
    "Experiment with new content formats like Reels or Stories.",
    "Share industry statistics and trends with your unique perspective.",
    "Build an email list from your social media following.",
    "Create urgency with limited-time offers and announcements.",
    "Focus on quality over quantity in your posting strategy.",
    "Use consistent branding across all your social platforms.",
    "Engage with your competitors' audiences authentically.",
    "Create content that addresses pain points in your market.",
    "Leverage user-generated content for authenticity.",
    "Optimize your social profiles for local search.",
    "Share your company values and mission in your content.",
    "Use AI to maintain consistent posting during busy periods.",
    "Create content clusters around your main topics.",
    "Engage with local community groups and forums.",
    "Test different content lengths to find your sweet spot.",
    "Use emojis strategically to increase engagement.",
    "Share industry news with your expert commentary.",
    "Create how-to guides and tutorials for your audience.",
    "Leverage seasonal trends in your content calendar.",
    "Build relationships with local media for PR opportunities.",
    "Use social listening to stay ahead of market trends.",
    "Create content that encourages saves and shares.",
    "Focus on building community, not just followers.",
    "Use AI to analyze competitor content strategies.",
    "Create content that sparks conversation and debate.",
    "Leverage local SEO in your social media strategy.",
    "Share milestone celebrations with your audience.",
    "Create anticipation for upcoming announcements.",
    "End the year strong with a content review and planning.",
    "Reflect on top-performing content for next year's strategy.",
];

#[derive(Debug)]
pub struct QuarterlyTrend {
    pub title: &'static str,
    pub focus: [&'static str; 4],
}

/// Indexed by `quarter - 1`.
pub static QUARTERLY_TRENDS: [QuarterlyTrend; 4] = [
    QuarterlyTrend {
        title: "Q1: Fresh Start & Strategy",
        focus: [
            "Set your social media goals for the year",
            "Audit your content performance from last year",
            "Plan major campaigns and content themes",
            "Update your brand voice and visual guidelines",
        ],
    },
    QuarterlyTrend {
        title: "Q2: Growth & Engagement",
        focus: [
            "Double down on content that performs well",
            "Test new platforms and content formats",
            "Build partnerships and collaborations",
            "Prepare for mid-year campaigns",
        ],
    },
    QuarterlyTrend {
        title: "Q3: Optimization & Preparation",
        focus: [
            "Analyze first-half performance metrics",
            "Prepare holiday content in advance",
            "Build your content library for busy season",
            "Strengthen customer relationships",
        ],
    },
    QuarterlyTrend {
        title: "Q4: Maximize & Reflect",
        focus: [
            "Execute holiday marketing campaigns",
            "Maximize year-end engagement opportunities",
            "Plan and schedule content for slower periods",
            "Document learnings for next year",
        ],
    },
];

#[derive(Debug)]
pub struct IndustryContentTable {
    pub topics: [&'static str; 5],
    pub content_types: [&'static str; 5],
}

pub static INDUSTRY_CONTENT: &[(&str, IndustryContentTable)] = &[
    ("Technology", IndustryContentTable {
        topics: ["Product updates", "Tech tips", "Industry trends", "Behind-the-scenes", "Team spotlights"],
        content_types: ["Demo videos", "Infographics", "How-to guides", "Case studies", "Thought leadership"],
    }),
    ("Healthcare", IndustryContentTable {
        topics: ["Wellness tips", "Patient stories", "Health awareness", "Team introductions", "Service highlights"],
        content_types: ["Educational posts", "Video testimonials", "Infographics", "FAQ content", "Community events"],
    }),
    ("Real Estate", IndustryContentTable {
        topics: ["Property showcases", "Market updates", "Neighborhood guides", "Buyer tips", "Success stories"],
        content_types: ["Virtual tours", "Market reports", "Client testimonials", "Local spotlights", "Just sold posts"],
    }),
    ("Finance", IndustryContentTable {
        topics: ["Financial tips", "Market insights", "Planning guides", "Industry news", "Client success"],
        content_types: ["Educational content", "Infographics", "Webinar promotions", "Case studies", "Compliance-safe posts"],
    }),
    ("Tourism", IndustryContentTable {
        topics: ["Destination highlights", "Travel tips", "Local experiences", "Seasonal specials", "Guest stories"],
        content_types: ["Stunning photography", "Video tours", "User-generated content", "Booking promotions", "Behind-the-scenes"],
    }),
    ("Entertainment", IndustryContentTable {
        topics: ["Event announcements", "Behind-the-scenes", "Artist spotlights", "Fan engagement", "Ticket promotions"],
        content_types: ["Teaser videos", "Live content", "Countdown posts", "Fan reposts", "Exclusive previews"],
    }),
    ("Manufacturing", IndustryContentTable {
        topics: ["Process showcases", "Quality highlights", "Team features", "Innovation stories", "Industry leadership"],
        content_types: ["Factory tours", "Product features", "B2B content", "Certifications", "Trade show coverage"],
    }),
];

pub static DEFAULT_INDUSTRY_CONTENT: IndustryContentTable = IndustryContentTable {
    topics: ["Industry updates", "Company news", "Team highlights", "Customer success", "Tips and insights"],
    content_types: ["Educational posts", "Behind-the-scenes", "Testimonials", "How-to content", "Engagement posts"],
};
