//! Resource repositories
//!
//! Thin facades over the [`Gateway`](crate::net::Gateway): lookups go through
//! the paginated fetch engine, writes are single requests.

mod security_group;

pub use security_group::{
    name_filter_path, AppSecurityGroup, ApplicationSecurityGroupRepo, SECURITY_GROUPS_PATH,
    SECURITY_GROUP_KIND,
};
