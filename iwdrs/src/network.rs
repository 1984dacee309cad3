use async_trait::async_trait;
use log::debug;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::interface;
use crate::device::Device;
use crate::iwd::Iwd;
use crate::known_network::KnownNetwork;
use crate::models::NetworkType;
use crate::objects::RemoteObject;

/// Snapshot of one `net.connman.iwd.Network` object — a network found in a
/// scan.
#[derive(Debug, Clone)]
pub struct Network<'a> {
    pub path: OwnedObjectPath,
    /// Network SSID.
    pub name: String,
    pub connected: bool,
    pub network_type: NetworkType,
    /// Device the network was seen on, fetched recursively at construction.
    pub device: Option<Device<'a>>,
    /// Saved-network object corresponding to this network, if any.
    pub known_network: Option<KnownNetwork<'a>>,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for Network<'a> {
    const INTERFACE: &'static str = interface::NETWORK;

    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        let mut props = iwd.get_all_properties(path.as_str(), Self::INTERFACE).await?;
        let device = match props.take_optional::<OwnedObjectPath>("Device")? {
            Some(device_path) => Some(Device::from_path(device_path, iwd).await?),
            None => None,
        };
        let known_network = match props.take_optional::<OwnedObjectPath>("KnownNetwork")? {
            Some(known_path) => Some(KnownNetwork::from_path(known_path, iwd).await?),
            None => None,
        };
        Ok(Self {
            name: props.take("Name")?,
            connected: props.take("Connected")?,
            network_type: props.take_parsed("Type")?,
            device,
            known_network,
            path,
            iwd,
        })
    }
}

impl Network<'_> {
    /// Connects to the network.
    ///
    /// Any credentials the network requires are obtained through the
    /// daemon's agent. Returns once the connection attempt has finished or
    /// failed.
    pub async fn connect(&self) -> Result<()> {
        debug!("connecting to network '{}'", self.name);
        self.iwd
            .call(self.path.as_str(), Self::INTERFACE, "Connect", &())
            .await?;
        Ok(())
    }
}
