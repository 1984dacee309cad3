//! The facade owning the bus connection.

use log::debug;
use serde::Serialize;
use tokio::sync::RwLock;
use zbus::Connection;
use zbus::message::Message;
use zvariant::{DynamicType, Value};

use crate::Result;
use crate::adapter::Adapter;
use crate::constants::{IWD_SERVICE, interface};
use crate::daemon::Daemon;
use crate::dbus::{self, ManagedObjects};
use crate::device::Device;
use crate::known_network::KnownNetwork;
use crate::models::IwdError;
use crate::network::Network;
use crate::objects::objects_by_interface;
use crate::station::Station;
use crate::variant::PropertyMap;
use crate::wsc::Wsc;

/// High-level handle to the iwd daemon over the D-Bus system bus.
///
/// `Iwd` is the sole owner of the connection. Every entity it hands out
/// carries a non-owning back-reference to it for issuing further calls;
/// after [`close`](Iwd::close) those calls fail with
/// [`IwdError::ConnectionClosed`].
#[derive(Debug)]
pub struct Iwd {
    conn: RwLock<Option<Connection>>,
}

impl Iwd {
    /// Connects to the system bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        debug!("connected to the system bus as a client of {IWD_SERVICE}");
        Ok(Self::with_connection(conn))
    }

    /// Wraps an externally created connection.
    pub fn with_connection(conn: Connection) -> Self {
        Self {
            conn: RwLock::new(Some(conn)),
        }
    }

    /// Releases the connection.
    ///
    /// Entities constructed from this handle remain readable as snapshots,
    /// but any call they issue afterwards fails with
    /// [`IwdError::ConnectionClosed`].
    pub async fn close(&self) {
        if self.conn.write().await.take().is_some() {
            debug!("connection to {IWD_SERVICE} closed");
        }
    }

    /// Lists all adapters (radios) known to the daemon.
    pub async fn adapters(&self) -> Result<Vec<Adapter<'_>>> {
        objects_by_interface(self).await
    }

    /// Lists all network devices.
    pub async fn devices(&self) -> Result<Vec<Device<'_>>> {
        objects_by_interface(self).await
    }

    /// Lists all devices currently in station mode.
    pub async fn stations(&self) -> Result<Vec<Station<'_>>> {
        objects_by_interface(self).await
    }

    /// Lists all networks found in the most recent scans.
    pub async fn networks(&self) -> Result<Vec<Network<'_>>> {
        objects_by_interface(self).await
    }

    /// Lists all saved networks.
    pub async fn known_networks(&self) -> Result<Vec<KnownNetwork<'_>>> {
        objects_by_interface(self).await
    }

    /// Returns the daemon's global status object.
    pub async fn daemon(&self) -> Result<Daemon<'_>> {
        let mut daemons: Vec<Daemon<'_>> = objects_by_interface(self).await?;
        if daemons.is_empty() {
            return Err(IwdError::MissingObject {
                interface: interface::DAEMON,
            });
        }
        Ok(daemons.swap_remove(0))
    }

    /// Returns a WSC helper for every station.
    ///
    /// The WSC interface lives on the station's own object path, so this is
    /// derived from the station listing rather than a separate scan.
    pub async fn wsc(&self) -> Result<Vec<Wsc<'_>>> {
        let stations = self.stations().await?;
        Ok(stations
            .into_iter()
            .map(|station| Wsc::new(station.path, self))
            .collect())
    }

    pub(crate) async fn call<B>(
        &self,
        path: &str,
        iface: &str,
        method: &str,
        body: &B,
    ) -> Result<Message>
    where
        B: Serialize + DynamicType + Sync,
    {
        let guard = self.conn.read().await;
        let conn = guard.as_ref().ok_or(IwdError::ConnectionClosed)?;
        dbus::call_method(conn, path, iface, method, body).await
    }

    pub(crate) async fn get_all_properties(&self, path: &str, iface: &str) -> Result<PropertyMap> {
        let guard = self.conn.read().await;
        let conn = guard.as_ref().ok_or(IwdError::ConnectionClosed)?;
        dbus::get_all_properties(conn, path, iface)
            .await
            .map(PropertyMap::new)
    }

    pub(crate) async fn managed_objects(&self) -> Result<ManagedObjects> {
        let guard = self.conn.read().await;
        let conn = guard.as_ref().ok_or(IwdError::ConnectionClosed)?;
        dbus::get_managed_objects(conn).await
    }

    pub(crate) async fn set_property(
        &self,
        path: &str,
        iface: &str,
        property: &str,
        value: Value<'_>,
    ) -> Result<()> {
        let guard = self.conn.read().await;
        let conn = guard.as_ref().ok_or(IwdError::ConnectionClosed)?;
        dbus::set_property(conn, path, iface, property, value).await
    }
}
