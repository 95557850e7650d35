use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A named set of network egress rules bound to spaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSecurityGroup {
    pub guid: String,
    pub name: String,
    /// Rule objects (protocol, ports, destination, ...) as the server knows them
    pub rules: Vec<HashMap<String, String>>,
    pub space_guids: BTreeSet<String>,
}

/// Payload for creating a security group; the server assigns the guid
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationSecurityGroupParams {
    pub name: String,
    pub rules: Vec<HashMap<String, String>>,
    pub space_guids: Vec<String>,
}
