//! Cloud controller client for application security groups
//!
//! Lookup, creation and deletion of application security groups against a
//! cloud controller v2 API, built on a generic paginated-listing engine that
//! any other resource repository can reuse.
//!
//! # Module Structure
//!
//! - [`api`] - Resource repositories (create / read / delete facades)
//! - [`net`] - HTTP client, gateway and the paginated fetch engine
//! - [`resources`] - Wire shapes of page items and their model mapping
//! - [`models`] - Caller-facing domain models
//! - [`config`] - Persistent endpoint/token configuration
//! - [`errors`] - Crate-wide error type
//! - [`logging`] - File logging setup for embedding applications
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cfasg::api::{AppSecurityGroup, ApplicationSecurityGroupRepo};
//! use cfasg::config::Config;
//! use cfasg::net::CloudControllerGateway;
//!
//! async fn example() -> Result<(), cfasg::errors::ApiError> {
//!     let config = Config::load();
//!     let gateway = CloudControllerGateway::new(config.access_token.clone())?;
//!     let repo = ApplicationSecurityGroupRepo::new(Arc::new(config), Arc::new(gateway));
//!     let group = repo.read("public-networks").await?;
//!     repo.delete(&group.guid).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod net;
pub mod resources;

/// Version string sent in the user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
