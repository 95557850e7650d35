use super::{null_as_default, Resource, SpaceEntity, ToModel};
use crate::models::ApplicationSecurityGroup;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationSecurityGroupEntity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<HashMap<String, String>>,
    /// Present when listed with `inline-relations-depth=1`
    #[serde(default, deserialize_with = "null_as_default")]
    pub spaces: Vec<Resource<SpaceEntity>>,
}

pub type ApplicationSecurityGroupResource = Resource<ApplicationSecurityGroupEntity>;

impl ToModel for ApplicationSecurityGroupResource {
    type Model = ApplicationSecurityGroup;

    fn to_model(self) -> ApplicationSecurityGroup {
        ApplicationSecurityGroup {
            guid: self.metadata.guid,
            name: self.entity.name,
            rules: self.entity.rules,
            space_guids: self
                .entity
                .spaces
                .into_iter()
                .map(|space| space.metadata.guid)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_model_maps_all_fields() {
        let resource: ApplicationSecurityGroupResource = serde_json::from_value(json!({
            "metadata": {
                "guid": "asg-guid",
                "url": "/v2/app_security_groups/asg-guid",
                "created_at": "2014-06-23T22:55:30+00:00",
                "updated_at": null
            },
            "entity": {
                "name": "public-networks",
                "rules": [
                    { "protocol": "tcp", "destination": "0.0.0.0/0", "ports": "443" },
                    { "protocol": "udp", "destination": "10.0.0.0/8", "ports": "53" }
                ],
                "spaces": [
                    { "metadata": { "guid": "space-1" }, "entity": { "name": "dev" } },
                    { "metadata": { "guid": "space-2" }, "entity": { "name": "prod" } }
                ]
            }
        }))
        .unwrap();

        assert!(resource.metadata.created_at.is_some());
        assert!(resource.metadata.updated_at.is_none());

        let model = resource.to_model();
        assert_eq!(model.guid, "asg-guid");
        assert_eq!(model.name, "public-networks");
        assert_eq!(model.rules.len(), 2);
        assert_eq!(model.rules[0]["ports"], "443");
        assert_eq!(model.rules[1]["protocol"], "udp");
        assert_eq!(
            model.space_guids.into_iter().collect::<Vec<_>>(),
            vec!["space-1", "space-2"]
        );
    }

    #[test]
    fn test_sparse_resource_still_maps() {
        let resource: ApplicationSecurityGroupResource =
            serde_json::from_value(json!({ "entity": { "name": "bare" } })).unwrap();

        let model = resource.to_model();
        assert_eq!(model.guid, "");
        assert_eq!(model.name, "bare");
        assert!(model.rules.is_empty());
        assert!(model.space_guids.is_empty());
    }

    #[test]
    fn test_null_fields_map_to_empty_model() {
        let resource: ApplicationSecurityGroupResource = serde_json::from_value(json!({
            "metadata": { "guid": null, "url": null, "created_at": null, "updated_at": null },
            "entity": { "name": null, "rules": null, "spaces": null }
        }))
        .unwrap();

        let model = resource.to_model();
        assert_eq!(model, ApplicationSecurityGroup::default());
    }

    #[test]
    fn test_null_envelopes_and_inlined_space_names() {
        let resource: ApplicationSecurityGroupResource = serde_json::from_value(json!({
            "metadata": null,
            "entity": {
                "name": "x",
                "rules": null,
                "spaces": [{ "metadata": { "guid": "space-1" }, "entity": { "name": null } }]
            }
        }))
        .unwrap();

        assert_eq!(resource.entity.spaces[0].entity.name, "");
        let model = resource.to_model();
        assert_eq!(model.guid, "");
        assert_eq!(model.name, "x");
        assert!(model.rules.is_empty());
        assert!(model.space_guids.contains("space-1"));
    }
}
