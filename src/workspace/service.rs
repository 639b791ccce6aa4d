use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::{error, info};

use super::client::ApiClient;
use super::config::{GuacOptions, WorkspaceConfig};
use super::error::ServiceError;
use super::model::connection::{Connection, ConnectionConfig, ROOT_CONNECTION_GROUP};
use super::user::AuthenticatedUser;

const RDP_PROTOCOL: &str = "rdp";
const RDP_PORT: &str = "3389";
const RESIZE_METHOD: &str = "display-update";

/// Translates the workspace's VM listing into remote desktop connection
/// descriptors, keyed by the VM's network address.
pub struct ConnectionService {
    client: ApiClient,
    guac: GuacOptions,
}

impl ConnectionService {
    pub fn new(config: &WorkspaceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
            guac: config.guac.clone(),
        })
    }

    /// The only public entry point: one complete mapping of connections, or
    /// one [`ServiceError`]. Never a partial result.
    ///
    /// Each descriptor is attached to the root connection group and keyed by
    /// the VM's address; on a key collision the first descriptor wins and
    /// later ones are silently dropped.
    pub async fn get_connections(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<BTreeMap<String, Connection>, ServiceError> {
        let mut connections = BTreeMap::new();
        let configs = self.get_configurations(user).await?;

        for (identifier, config) in configs {
            let connection = Connection {
                identifier: identifier.clone(),
                name: identifier.clone(),
                parent_identifier: ROOT_CONNECTION_GROUP.to_string(),
                config,
            };
            if let Entry::Vacant(entry) = connections.entry(identifier) {
                entry.insert(connection);
            }
        }

        Ok(connections)
    }

    /// Builds one RDP configuration per VM record that exposes both a
    /// hostname and an address. An absent user is an empty mapping, not an
    /// error, and no request is made at all.
    async fn get_configurations(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<BTreeMap<String, ConnectionConfig>, ServiceError> {
        let mut configs = BTreeMap::new();
        let Some(user) = user else {
            return Ok(configs);
        };

        let resources = self.client.list_user_resources(user).await.map_err(|e| {
            error!("Exception getting VMs: {e}");
            e
        })?;

        for resource in resources {
            let properties = resource.properties;
            let (Some(hostname), Some(ip)) = (properties.hostname, properties.ip) else {
                info!("Missing ip or hostname, skipping...");
                continue;
            };

            let mut config = ConnectionConfig::new(RDP_PROTOCOL);
            config.set_parameter("hostname", &ip);
            config.set_parameter("resize-method", RESIZE_METHOD);
            config.set_parameter("azure-resource-id", &hostname);
            config.set_parameter("port", RDP_PORT);
            config.set_parameter("ignore-cert", "true");
            config.set_optional_parameter("disable-copy", self.guac.disable_copy.as_deref());
            config.set_optional_parameter("disable-paste", self.guac.disable_paste.as_deref());
            config.set_optional_parameter("enable-drive", self.guac.enable_drive.as_deref());
            config.set_optional_parameter("drive-name", self.guac.drive_name.as_deref());
            config.set_optional_parameter("drive-path", self.guac.drive_path.as_deref());
            config.set_optional_parameter("disable-download", self.guac.disable_download.as_deref());

            info!("Adding a VM: {ip}");
            if let Entry::Vacant(entry) = configs.entry(ip) {
                entry.insert(config);
            }
        }

        Ok(configs)
    }
}
