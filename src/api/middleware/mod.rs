// Middleware adapters for the HTTP layer

pub mod auth;

pub use auth::JwtAuth;
