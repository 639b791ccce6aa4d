use std::time::Duration;

use log::{debug, error};
use reqwest::Method;
use url::Url;

use super::config::{expand_env_vars, WorkspaceConfig};
use super::error::ServiceError;
use super::model::resource::{UserResource, UserResourcesResponse};
use super::user::AuthenticatedUser;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the workspace API. Handles the authentication header and
/// URL construction; one GET per listing call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
    workspace_id: String,
    service_id: String,
}

impl ApiClient {
    pub fn new(config: &WorkspaceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .use_rustls_tls()
            .build()?;

        Ok(Self {
            client,
            api_url: expand_env_vars(&config.api_url)?,
            workspace_id: expand_env_vars(&config.workspace_id)?,
            service_id: expand_env_vars(&config.service_id)?,
        })
    }

    fn user_resources_url(&self) -> Result<Url, ServiceError> {
        // Ensure the base URL ends with a trailing slash for proper path joining
        let mut base_endpoint = self.api_url.clone();
        if !base_endpoint.ends_with('/') {
            base_endpoint.push('/');
        }

        let base_url = Url::parse(&base_endpoint)?;
        let url = base_url.join(&format!(
            "api/workspaces/{}/workspace-services/{}/user-resources",
            self.workspace_id, self.service_id
        ))?;
        Ok(url)
    }

    /// Fetches the raw VM records for the given user. A blank body means no
    /// resources; anything else must parse as the listing object. The HTTP
    /// status is not checked: a non-2xx answer with an unparseable body
    /// surfaces as a parse failure, not a status failure.
    pub async fn list_user_resources(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<Vec<UserResource>, ServiceError> {
        let url = self.user_resources_url()?;
        debug!("🔗 Request URL: {url}");

        let response = self
            .client
            .request(Method::GET, url)
            .header("Accept", "application/json")
            .bearer_auth(&user.access_token)
            .send()
            .await?;

        let response_text = response.text().await?;
        if response_text.trim().is_empty() {
            debug!("Blank listing body, no user resources");
            return Ok(Vec::new());
        }

        let listing: UserResourcesResponse = match serde_json::from_str(&response_text) {
            Ok(listing) => listing,
            Err(e) => {
                error!("Failed to decode user resource listing. Error: {}", e);
                error!(
                    "Response body (first 500 chars): {}",
                    &response_text.chars().take(500).collect::<String>()
                );
                return Err(ServiceError::Parse(e));
            }
        };

        debug!("Fetched {} user resources", listing.user_resources.len());
        Ok(listing.user_resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::config::GuacOptions;

    fn test_config(api_url: &str) -> WorkspaceConfig {
        WorkspaceConfig {
            api_url: api_url.to_string(),
            workspace_id: "ws-22aa".to_string(),
            service_id: "svc-9f".to_string(),
            guac: GuacOptions::default(),
        }
    }

    const LISTING_PATH: &str = "/api/workspaces/ws-22aa/workspace-services/svc-9f/user-resources";

    #[test]
    fn builds_url_with_and_without_trailing_slash() {
        for api_url in ["https://tre.example.com", "https://tre.example.com/"] {
            let client = ApiClient::new(&test_config(api_url)).unwrap();
            let url = client.user_resources_url().unwrap();
            assert_eq!(url.as_str(), format!("https://tre.example.com{LISTING_PATH}"));
        }
    }

    #[tokio::test]
    async fn sends_auth_and_accept_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", LISTING_PATH)
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", "application/json")
            .with_body(r#"{"userResources": []}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&test_config(&server.url())).unwrap();
        let user = AuthenticatedUser::new("test-token");
        let resources = client.list_user_resources(&user).await.unwrap();

        mock.assert_async().await;
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn blank_body_yields_empty_listing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", LISTING_PATH)
            .with_body("  \n")
            .create_async()
            .await;

        let client = ApiClient::new(&test_config(&server.url())).unwrap();
        let user = AuthenticatedUser::new("test-token");
        let resources = client.list_user_resources(&user).await.unwrap();
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", LISTING_PATH)
            .with_status(500)
            .with_body("<html>Internal Server Error</html>")
            .create_async()
            .await;

        let client = ApiClient::new(&test_config(&server.url())).unwrap();
        let user = AuthenticatedUser::new("test-token");
        let err = client.list_user_resources(&user).await.unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Nothing listens on port 1; the connect fails immediately.
        let client = ApiClient::new(&test_config("http://127.0.0.1:1")).unwrap();
        let user = AuthenticatedUser::new("test-token");
        let err = client.list_user_resources(&user).await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
        assert!(err.to_string().starts_with("connection failed: "));
    }
}
