//! Remote sources: the CMS token endpoint and the blog API behind it.

pub mod cms;
pub mod error;
pub mod fetch;
pub mod oauth2;

pub use cms::BlogClient;
pub use error::CmsError;
pub use fetch::FetchOutcome;
pub use oauth2::{Credentials, OAuth2Client};
