//! Date-driven, deterministic marketing copy for location pages.

pub mod bundle;
pub mod date;
pub mod estimates;
pub mod faq;
pub mod related;
pub mod selector;
pub mod tables;

pub use bundle::LocationContent;
pub use date::{DateContext, Season};
pub use related::related_locations;
