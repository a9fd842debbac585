pub mod fallback;
pub mod models;
