use serde::{Deserialize, Serialize};

/// Blog post as returned by the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<AuthorRef>,
    pub categories: Option<Vec<CategoryRef>>,
    pub published_at: String,
    pub status: PostStatus,
    pub seo: Option<SeoOverrides>,
}

impl BlogPost {
    /// SEO title override, falling back to the post title.
    pub fn seo_title(&self) -> &str {
        self.seo
            .as_ref()
            .and_then(|seo| seo.title.as_deref())
            .unwrap_or(&self.title)
    }

    /// SEO description override, falling back to the excerpt.
    pub fn seo_description(&self) -> Option<&str> {
        self.seo
            .as_ref()
            .and_then(|seo| seo.description.as_deref())
            .or(self.excerpt.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogAuthor {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

// Response envelopes. A missing or null list means "nothing there".

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostsEnvelope {
    #[serde(default)]
    pub posts: Option<Vec<BlogPost>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<BlogCategory>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthorsEnvelope {
    #[serde(default)]
    pub authors: Option<Vec<BlogAuthor>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SlugExistsEnvelope {
    #[serde(default)]
    pub exists: Option<bool>,
}
