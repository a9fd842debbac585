//! # Kontent Agent Library
//!
//! Backs the dynamic parts of the KontentFire marketing site: blog content
//! from the headless CMS behind a cached OAuth2 token, and deterministic,
//! date-driven copy for location pages.
//!
//! Modules:
//! - `config`: service configuration, loading and validation
//! - `cache`: single-slot access token cache
//! - `sources`: CMS token exchange and blog reads
//! - `blog`: blog models and static fallback posts
//! - `locations`: states and cities dataset
//! - `content`: deterministic location copy selection
//! - `server`: JSON HTTP API

pub mod blog;
pub mod cache;
pub mod config;
pub mod content;
pub mod helpers;
pub mod locations;
pub mod observability;
pub mod server;
pub mod sources;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::types::ServiceConfig;
pub use crate::content::LocationContent;
pub use crate::sources::{BlogClient, CmsError, FetchOutcome};
