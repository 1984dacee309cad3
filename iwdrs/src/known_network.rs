use async_trait::async_trait;
use log::debug;
use zvariant::{OwnedObjectPath, Value};

use crate::Result;
use crate::constants::interface;
use crate::iwd::Iwd;
use crate::models::NetworkType;
use crate::objects::RemoteObject;

/// Snapshot of one `net.connman.iwd.KnownNetwork` object — a saved network.
#[derive(Debug, Clone)]
pub struct KnownNetwork<'a> {
    pub path: OwnedObjectPath,
    /// Whether the daemon may connect to this network automatically.
    pub auto_connect: bool,
    /// Whether the network does not broadcast its SSID.
    pub hidden: bool,
    /// Time of the last successful connection, if recorded.
    pub last_connected_time: Option<String>,
    pub name: String,
    pub network_type: NetworkType,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for KnownNetwork<'a> {
    const INTERFACE: &'static str = interface::KNOWN_NETWORK;

    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        let mut props = iwd.get_all_properties(path.as_str(), Self::INTERFACE).await?;
        Ok(Self {
            auto_connect: props.take("AutoConnect")?,
            hidden: props.take("Hidden")?,
            last_connected_time: props.take_optional("LastConnectedTime")?,
            name: props.take("Name")?,
            network_type: props.take_parsed("Type")?,
            path,
            iwd,
        })
    }
}

impl KnownNetwork<'_> {
    /// Removes the network from the saved list along with any associated
    /// configuration. If the network is currently connected, it is
    /// disconnected immediately.
    pub async fn forget(&self) -> Result<()> {
        debug!("forgetting known network '{}'", self.name);
        self.iwd
            .call(self.path.as_str(), Self::INTERFACE, "Forget", &())
            .await?;
        Ok(())
    }

    /// Enables or disables automatic connection to this network.
    pub async fn set_auto_connect(&self, auto_connect: bool) -> Result<()> {
        self.iwd
            .set_property(
                self.path.as_str(),
                Self::INTERFACE,
                "AutoConnect",
                Value::from(auto_connect),
            )
            .await
    }
}
