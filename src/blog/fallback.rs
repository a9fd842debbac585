use crate::blog::models::{AuthorRef, BlogPost, CategoryRef, PostStatus};
use crate::sources::fetch::FetchOutcome;

fn team_post(
    id: &str,
    title: &str,
    slug: &str,
    excerpt: &str,
    content: &str,
    published_at: &str,
    category: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: title.to_owned(),
        slug: slug.to_owned(),
        content: content.to_owned(),
        excerpt: Some(excerpt.to_owned()),
        featured_image: None,
        author: Some(AuthorRef {
            id: "1".to_owned(),
            name: "KontentFire Team".to_owned(),
        }),
        categories: Some(vec![CategoryRef {
            id: id.to_owned(),
            name: category.to_owned(),
        }]),
        published_at: published_at.to_owned(),
        status: PostStatus::Published,
        seo: None,
    }
}

/// Posts shown when the CMS is unconfigured, unreachable or empty.
pub fn fallback_posts() -> Vec<BlogPost> {
    vec![
        team_post(
            "1",
            "10 Ways AI is Revolutionizing Social Media Marketing",
            "ai-revolutionizing-social-media-marketing",
            "Discover how artificial intelligence is transforming the way businesses approach social media marketing.",
            "<h2>The AI Revolution in Social Media</h2><p>Artificial intelligence is transforming how businesses approach social media marketing. From content creation to audience targeting, AI tools are making it easier than ever to build a strong online presence.</p><h3>1. Automated Content Generation</h3><p>AI can now write compelling social media posts, blog articles, and even video scripts.</p><h3>2. Smart Scheduling</h3><p>AI analyzes your audience engagement patterns to determine optimal posting times.</p><h3>3. Personalized Recommendations</h3><p>Machine learning algorithms suggest content topics based on what performs best.</p>",
            "2024-01-15T10:00:00Z",
            "AI Marketing",
        ),
        team_post(
            "2",
            "The Ultimate Guide to Content Scheduling",
            "ultimate-guide-content-scheduling",
            "Learn the best practices for scheduling your social media content to maximize engagement.",
            "<h2>Master Your Content Calendar</h2><p>Consistent posting is key to social media success.</p><h3>Why Scheduling Matters</h3><p>Posting consistently builds audience expectations and keeps your brand top of mind.</p><h3>Best Times to Post</h3><p>Optimal times vary by platform and audience. Test and iterate to find what works for you.</p>",
            "2024-01-10T10:00:00Z",
            "Content Strategy",
        ),
        team_post(
            "3",
            "How to Create Viral LinkedIn Posts with AI",
            "create-viral-linkedin-posts-ai",
            "Step-by-step guide to using AI to craft LinkedIn posts that get massive engagement.",
            "<h2>The LinkedIn Algorithm Decoded</h2><p>LinkedIn rewards content that sparks meaningful conversations.</p><h3>Hook Your Readers</h3><p>Start with a compelling first line that makes people want to read more.</p><h3>Tell Stories</h3><p>Personal stories and case studies perform exceptionally well on LinkedIn.</p>",
            "2024-01-05T10:00:00Z",
            "LinkedIn",
        ),
    ]
}

pub fn fallback_post(slug: &str) -> Option<BlogPost> {
    fallback_posts().into_iter().find(|post| post.slug == slug)
}

/// Where a served post list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSource {
    Cms,
    Fallback,
}

impl PostSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostSource::Cms => "cms",
            PostSource::Fallback => "fallback",
        }
    }
}

/// Fetched posts when there are any, the fallback set otherwise.
pub fn posts_or_fallback(outcome: FetchOutcome<Vec<BlogPost>>) -> (PostSource, Vec<BlogPost>) {
    match outcome.into_inner_or_default() {
        posts if posts.is_empty() => (PostSource::Fallback, fallback_posts()),
        posts => (PostSource::Cms, posts),
    }
}

/// CMS post when found, otherwise the fallback post with the same slug.
pub fn post_or_fallback(slug: &str, outcome: FetchOutcome<Option<BlogPost>>) -> Option<(PostSource, BlogPost)> {
    match outcome.into_inner_or_default() {
        Some(post) => Some((PostSource::Cms, post)),
        None => fallback_post(slug).map(|post| (PostSource::Fallback, post)),
    }
}
