use async_trait::async_trait;
use zvariant::{OwnedObjectPath, Value};

use crate::Result;
use crate::adapter::Adapter;
use crate::constants::interface;
use crate::iwd::Iwd;
use crate::models::DeviceMode;
use crate::objects::RemoteObject;

/// Snapshot of one `net.connman.iwd.Device` object — a network interface.
#[derive(Debug, Clone)]
pub struct Device<'a> {
    pub path: OwnedObjectPath,
    /// Adapter the device belongs to, fetched recursively at construction.
    pub adapter: Option<Adapter<'a>>,
    /// Hardware address in `XX:XX:XX:XX:XX:XX` format.
    pub address: String,
    pub mode: DeviceMode,
    /// Kernel interface name, e.g. `wlan0`.
    pub name: String,
    pub powered: bool,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for Device<'a> {
    const INTERFACE: &'static str = interface::DEVICE;

    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        let mut props = iwd.get_all_properties(path.as_str(), Self::INTERFACE).await?;
        let adapter = match props.take_optional::<OwnedObjectPath>("Adapter")? {
            Some(adapter_path) => Some(Adapter::from_path(adapter_path, iwd).await?),
            None => None,
        };
        Ok(Self {
            adapter,
            address: props.take("Address")?,
            mode: props.take_parsed("Mode")?,
            name: props.take("Name")?,
            powered: props.take("Powered")?,
            path,
            iwd,
        })
    }
}

impl Device<'_> {
    /// Powers the device up or down.
    pub async fn set_powered(&self, powered: bool) -> Result<()> {
        self.iwd
            .set_property(
                self.path.as_str(),
                Self::INTERFACE,
                "Powered",
                Value::from(powered),
            )
            .await
    }

    /// Switches the device into another operating mode.
    pub async fn set_mode(&self, mode: DeviceMode) -> Result<()> {
        self.iwd
            .set_property(
                self.path.as_str(),
                Self::INTERFACE,
                "Mode",
                Value::from(mode.as_str()),
            )
            .await
    }
}
