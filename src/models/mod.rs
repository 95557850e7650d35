//! Domain models handed to callers

mod security_group;

pub use security_group::{ApplicationSecurityGroup, ApplicationSecurityGroupParams};
