pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use clock::Clock;
pub use config::Config;
pub use routes::AppState;
