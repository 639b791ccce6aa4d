use serde::Deserialize;

/// Top-level shape of the user-resources listing returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResourcesResponse {
    #[serde(rename = "userResources")]
    pub user_resources: Vec<UserResource>,
}

/// One provisioned VM in the workspace listing. The API attaches many more
/// fields; only the nested properties block matters here, and a record
/// without one fails the whole listing rather than being skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResource {
    pub properties: ResourceProperties,
}

/// Template parameters of a resource. `hostname` and `ip` are both optional
/// on the wire; a connection is only built when both are present.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceProperties {
    pub hostname: Option<String>,
    pub ip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing() {
        let body = r#"{
            "userResources": [
                {"id": "res-1", "isEnabled": true, "properties": {"hostname": "vm1", "ip": "10.0.0.1", "os": "linux"}},
                {"properties": {"hostname": "vm2"}}
            ]
        }"#;
        let listing: UserResourcesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(listing.user_resources.len(), 2);
        assert_eq!(
            listing.user_resources[0].properties.hostname.as_deref(),
            Some("vm1")
        );
        assert_eq!(listing.user_resources[1].properties.ip, None);
    }

    #[test]
    fn record_without_properties_is_an_error() {
        let body = r#"{"userResources": [{"id": "res-1"}]}"#;
        let result: Result<UserResourcesResponse, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }
}
