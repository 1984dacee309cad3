use async_trait::async_trait;
use zvariant::{OwnedObjectPath, Value};

use crate::Result;
use crate::constants::interface;
use crate::iwd::Iwd;
use crate::models::DeviceMode;
use crate::objects::RemoteObject;

/// Snapshot of one `net.connman.iwd.Adapter` object — a physical radio.
#[derive(Debug, Clone)]
pub struct Adapter<'a> {
    pub path: OwnedObjectPath,
    pub name: String,
    /// Model name, when the hardware reports one.
    pub model: Option<String>,
    /// Vendor name, when the hardware reports one.
    pub vendor: Option<String>,
    pub powered: bool,
    /// Modes this adapter's devices can be switched into.
    pub supported_modes: Vec<DeviceMode>,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for Adapter<'a> {
    const INTERFACE: &'static str = interface::ADAPTER;

    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        let mut props = iwd.get_all_properties(path.as_str(), Self::INTERFACE).await?;
        let supported_modes = props
            .take::<Vec<String>>("SupportedModes")?
            .iter()
            .map(|mode| mode.parse())
            .collect::<Result<_>>()?;
        Ok(Self {
            name: props.take("Name")?,
            model: props.take_optional("Model")?,
            vendor: props.take_optional("Vendor")?,
            powered: props.take("Powered")?,
            supported_modes,
            path,
            iwd,
        })
    }
}

impl Adapter<'_> {
    /// Powers the adapter up or down.
    ///
    /// The snapshot is not updated; list adapters again to observe the new
    /// value.
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
}
