pub mod builder;
pub mod cache;
pub mod cached;
pub mod constants;
pub mod error;
pub mod gateway;

pub use builder::TransportBuilder;
pub use cache::QueryCache;
pub use cached::{CachedHub, HubCaches};
pub use gateway::GatewayTransport;
