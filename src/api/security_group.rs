//! Application security group repository

use crate::config::EndpointReader;
use crate::errors::ApiError;
use crate::models::{ApplicationSecurityGroup, ApplicationSecurityGroupParams};
use crate::net::{list_paginated_resources, Gateway};
use crate::resources::{ApplicationSecurityGroupResource, ToModel};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// Resource kind reported in not-found errors
pub const SECURITY_GROUP_KIND: &str = "application security group";

/// Collection path, relative to the API root
pub const SECURITY_GROUPS_PATH: &str = "/v2/app_security_groups";

#[async_trait]
pub trait AppSecurityGroup: Send + Sync {
    /// Create a group. The created model is not returned; read it back to
    /// learn its guid.
    async fn create(
        &self,
        name: &str,
        rules: Vec<HashMap<String, String>>,
        space_guids: Vec<String>,
    ) -> Result<(), ApiError>;

    /// Look a group up by name.
    ///
    /// When several groups share the name, the first one the server lists is
    /// returned and the rest are never inspected.
    async fn read(&self, name: &str) -> Result<ApplicationSecurityGroup, ApiError>;

    /// Delete a group by guid. A missing group surfaces as the server's
    /// error, never as [`ApiError::ModelNotFound`].
    async fn delete(&self, guid: &str) -> Result<(), ApiError>;

    /// Every group visible to the caller, in server order
    async fn list_all(&self) -> Result<Vec<ApplicationSecurityGroup>, ApiError>;
}

/// Path of the name-filtered lookup, with spaces inlined
pub fn name_filter_path(name: &str) -> String {
    format!(
        "{}?q={}&inline-relations-depth=1",
        SECURITY_GROUPS_PATH,
        urlencoding::encode(&format!("name:{}", name))
    )
}

#[derive(Clone)]
pub struct ApplicationSecurityGroupRepo {
    config: Arc<dyn EndpointReader>,
    gateway: Arc<dyn Gateway>,
}

impl ApplicationSecurityGroupRepo {
    pub fn new(config: Arc<dyn EndpointReader>, gateway: Arc<dyn Gateway>) -> Self {
        Self { config, gateway }
    }

    /// Name lookup with an explicit mapper, stopping at the first item
    async fn find_by_name<M>(
        &self,
        name: &str,
        mut to_model: M,
    ) -> Result<ApplicationSecurityGroup, ApiError>
    where
        M: FnMut(ApplicationSecurityGroupResource) -> ApplicationSecurityGroup + Send,
    {
        let endpoint = self.config.api_endpoint();
        let path = name_filter_path(name);
        let mut group = None;

        list_paginated_resources(
            self.gateway.as_ref(),
            &endpoint,
            &path,
            |resource: ApplicationSecurityGroupResource| {
                group = Some(to_model(resource));
                false
            },
        )
        .await?;

        group.ok_or_else(|| ApiError::model_not_found(SECURITY_GROUP_KIND, name))
    }
}

#[async_trait]
impl AppSecurityGroup for ApplicationSecurityGroupRepo {
    async fn create(
        &self,
        name: &str,
        rules: Vec<HashMap<String, String>>,
        space_guids: Vec<String>,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.config.api_endpoint(), SECURITY_GROUPS_PATH);
        let params = ApplicationSecurityGroupParams {
            name: name.to_string(),
            rules,
            space_guids,
        };

        tracing::debug!("Creating {} '{}'", SECURITY_GROUP_KIND, name);
        self.gateway
            .create_resource(&url, serde_json::to_value(&params)?)
            .await
    }

    async fn read(&self, name: &str) -> Result<ApplicationSecurityGroup, ApiError> {
        self.find_by_name(name, ApplicationSecurityGroupResource::to_model)
            .await
    }

    async fn delete(&self, guid: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}{}/{}",
            self.config.api_endpoint(),
            SECURITY_GROUPS_PATH,
            guid
        );

        tracing::debug!("Deleting {} {}", SECURITY_GROUP_KIND, guid);
        self.gateway.delete_resource(&url).await
    }

    async fn list_all(&self) -> Result<Vec<ApplicationSecurityGroup>, ApiError> {
        let endpoint = self.config.api_endpoint();
        let path = format!("{}?inline-relations-depth=1", SECURITY_GROUPS_PATH);
        let mut groups = Vec::new();

        list_paginated_resources(
            self.gateway.as_ref(),
            &endpoint,
            &path,
            |resource: ApplicationSecurityGroupResource| {
                groups.push(resource.to_model());
                true
            },
        )
        .await?;

        Ok(groups)
    }
}
