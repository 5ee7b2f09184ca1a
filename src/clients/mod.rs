//! Resource clients for the Turnkey SDK.

pub mod activities;
pub mod api_keys;
pub mod organizations;
pub mod users;

// Re-exports
pub use activities::ActivitiesClient;
pub use api_keys::ApiKeysClient;
pub use organizations::OrganizationsClient;
pub use users::UsersClient;
