pub mod connection;
pub mod resource;

// Re-export common types for easier access
pub use connection::{Connection, ConnectionConfig, ROOT_CONNECTION_GROUP};
pub use resource::{ResourceProperties, UserResource, UserResourcesResponse};
