//! Cloud controller API interaction module
//!
//! # Module Structure
//!
//! - [`http`] - reqwest wrapper turning replies into JSON or [`ApiError`](crate::errors::ApiError)
//! - [`gateway`] - The request primitives repositories depend on
//! - [`paginate`] - Generic paginated listing with visitor-driven early exit

pub mod gateway;
pub mod http;
pub mod paginate;

#[cfg(test)]
pub(crate) mod fake;

pub use gateway::{CloudControllerGateway, Gateway};
pub use paginate::{list_paginated_resources, page_url, PaginatedResources};
