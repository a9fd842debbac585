pub mod blog_routes;
pub mod location_routes;
pub mod server;
