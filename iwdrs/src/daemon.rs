use std::collections::HashMap;

use async_trait::async_trait;
use zvariant::{OwnedObjectPath, OwnedValue};

use crate::Result;
use crate::constants::interface;
use crate::dbus;
use crate::iwd::Iwd;
use crate::models::DaemonInfo;
use crate::objects::RemoteObject;
use crate::variant::decode_structured;

/// The daemon's global status object at `/net/connman/iwd`.
#[derive(Debug, Clone)]
pub struct Daemon<'a> {
    pub path: OwnedObjectPath,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for Daemon<'a> {
    const INTERFACE: &'static str = interface::DAEMON;

    // The Daemon interface has no properties, so no round trip is needed.
    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        Ok(Self { path, iwd })
    }
}

impl Daemon<'_> {
    /// Returns the daemon's status and configuration properties.
    ///
    /// The values are global and mostly of interest to bus clients rather
    /// than end users. Keys unknown to this client are ignored.
    pub async fn get_info(&self) -> Result<DaemonInfo> {
        let reply = self
            .iwd
            .call(self.path.as_str(), Self::INTERFACE, "GetInfo", &())
            .await?;
        let props: HashMap<String, OwnedValue> = dbus::decode_reply(&reply)?;
        decode_structured(&props)
    }
}
