use serde::Deserialize;
use std::{env, fs};

use crate::config::settings::SettingsConfig;
use crate::utils::constants::{DEFAULT_CMS_API_VERSION, DEFAULT_CMS_BASE_URL};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    pub cms: CmsConfig,
    pub locations: LocationsConfig,
}

/// ================================
/// Headless CMS (blog) access
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct CmsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub refresh_token: Option<SecretValue>,
    pub client_id: Option<SecretValue>,
    pub client_secret: Option<SecretValue>,
    /// blog (collection) the posts are read from
    pub blog_id: Option<SecretValue>,
    /// CMS sub-account owning categories and authors
    pub location_id: Option<SecretValue>,
}

impl CmsConfig {
    pub fn blog_id(&self) -> Option<String> {
        self.blog_id.as_ref().and_then(SecretValue::resolve)
    }

    pub fn location_id(&self) -> Option<String> {
        self.location_id.as_ref().and_then(SecretValue::resolve)
    }
}

/// Where a credential or id comes from.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SecretValue {
    Literal {
        value: String,
    },
    FromEnv {
        from_env: String,
    },
    FromFile {
        path: String,
    },
}

impl SecretValue {
    /// Resolved, trimmed value. Unset variables, unreadable files and blank
    /// values all count as "not configured".
    pub fn resolve(&self) -> Option<String> {
        let raw = match self {
            SecretValue::Literal { value } => Some(value.to_owned()),
            SecretValue::FromEnv { from_env } => env::var(from_env).ok(),
            SecretValue::FromFile { path } => fs::read_to_string(path).ok(),
        }?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}

/// ================================
/// Location dataset
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LocationsConfig {
    pub path: String,
}

fn default_base_url() -> String {
    DEFAULT_CMS_BASE_URL.to_owned()
}

fn default_api_version() -> String {
    DEFAULT_CMS_API_VERSION.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn literal_values_are_trimmed_and_blank_is_unset() {
        let value = SecretValue::Literal { value: "  abc \n".into() };
        assert_eq!(value.resolve(), Some("abc".to_string()));

        let blank = SecretValue::Literal { value: "   ".into() };
        assert_eq!(blank.resolve(), None);
    }

    #[test]
    #[serial]
    fn env_values_follow_the_environment() {
        let value = SecretValue::FromEnv { from_env: "KONTENT_TEST_SECRET".into() };

        env::remove_var("KONTENT_TEST_SECRET");
        assert_eq!(value.resolve(), None);

        env::set_var("KONTENT_TEST_SECRET", "s3cr3t");
        assert_eq!(value.resolve(), Some("s3cr3t".to_string()));
        env::remove_var("KONTENT_TEST_SECRET");
    }

    #[test]
    fn file_values_are_read_once_per_resolve() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file").unwrap();
        let value = SecretValue::FromFile {
            path: file.path().to_string_lossy().into_owned(),
        };
        assert_eq!(value.resolve(), Some("from-file".to_string()));

        let missing = SecretValue::FromFile { path: "/nonexistent/kontent/secret".into() };
        assert_eq!(missing.resolve(), None);
    }

    #[test]
    fn untagged_secret_shapes_parse() {
        let yaml = r#"
base_url: "https://cms.test"
refresh_token:
  from_env: CMS_REFRESH_TOKEN
client_id:
  value: "client"
client_secret:
  path: "/run/secrets/cms"
"#;
        let cms: CmsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cms.api_version, DEFAULT_CMS_API_VERSION);
        assert_eq!(
            cms.refresh_token,
            Some(SecretValue::FromEnv { from_env: "CMS_REFRESH_TOKEN".into() })
        );
        assert_eq!(cms.client_id, Some(SecretValue::Literal { value: "client".into() }));
        assert_eq!(
            cms.client_secret,
            Some(SecretValue::FromFile { path: "/run/secrets/cms".into() })
        );
        assert!(cms.blog_id.is_none());
    }
}
