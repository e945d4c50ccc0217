//! Application State Module
//!
//! Contains the state aggregate and the domain records it holds.

mod app;
pub mod organization;
mod role;
mod session;

pub use app::{AppState, FeatureFlags};
pub use organization::{Organization, OrganizationError, OrganizationList};
pub use role::Role;
pub use session::Session;
