use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use zvariant::{OwnedObjectPath, OwnedValue};

use crate::Result;
use crate::constants::interface;
use crate::dbus;
use crate::iwd::Iwd;
use crate::models::{ConnectionState, SignalStrength, StationDiagnostics};
use crate::network::Network;
use crate::objects::RemoteObject;
use crate::variant::decode_structured;

/// A network paired with its maximum signal strength, as ranked by the
/// daemon.
#[derive(Debug, Clone)]
pub struct NetworkWithSignal<'a> {
    pub network: Network<'a>,
    pub signal_strength: SignalStrength,
}

/// Snapshot of one `net.connman.iwd.Station` object — a device operating in
/// station mode.
#[derive(Debug, Clone)]
pub struct Station<'a> {
    pub path: OwnedObjectPath,
    /// Network the station is connected to, or to which a connection is in
    /// progress. `None` while disconnected.
    pub connected_network: Option<Network<'a>>,
    /// Whether a scan is currently running.
    pub scanning: bool,
    pub state: ConnectionState,
    iwd: &'a Iwd,
}

#[async_trait]
impl<'a> RemoteObject<'a> for Station<'a> {
    const INTERFACE: &'static str = interface::STATION;

    async fn from_path(path: OwnedObjectPath, iwd: &'a Iwd) -> Result<Self> {
        let mut props = iwd.get_all_properties(path.as_str(), Self::INTERFACE).await?;
        let connected_network = match props.take_optional::<OwnedObjectPath>("ConnectedNetwork")? {
            Some(network_path) => Some(Network::from_path(network_path, iwd).await?),
            None => None,
        };
        Ok(Self {
            connected_network,
            scanning: props.take("Scanning")?,
            state: props.take_parsed("State")?,
            path,
            iwd,
        })
    }
}

impl<'a> Station<'a> {
    /// Schedules a network scan.
    pub async fn scan(&self) -> Result<()> {
        debug!("requesting scan on {}", self.path.as_str());
        self.iwd
            .call(self.path.as_str(), Self::INTERFACE, "Scan", &())
            .await?;
        Ok(())
    }

    /// Disconnects from the current network and disables autoconnect on
    /// this device until the next connection request.
    pub async fn disconnect(&self) -> Result<()> {
        self.iwd
            .call(self.path.as_str(), Self::INTERFACE, "Disconnect", &())
            .await?;
        Ok(())
    }

    /// Returns the networks found in the most recent scan, in the daemon's
    /// user-interface ranking.
    ///
    /// The currently connected network comes first, followed by known
    /// networks used at least once, then other known networks, then the
    /// remaining detected networks; within each group the daemon orders by
    /// descending signal strength. The order is taken from the daemon
    /// verbatim. Each entry's network is fully constructed via its own
    /// property fetch.
    pub async fn get_ordered_networks(&self) -> Result<Vec<NetworkWithSignal<'a>>> {
        let reply = self
            .iwd
            .call(self.path.as_str(), Self::INTERFACE, "GetOrderedNetworks", &())
            .await?;
        let pairs: Vec<(OwnedObjectPath, i16)> = dbus::decode_reply(&reply)?;

        let mut networks = Vec::with_capacity(pairs.len());
        for (network_path, signal) in pairs {
            networks.push(NetworkWithSignal {
                network: Network::from_path(network_path, self.iwd).await?,
                signal_strength: SignalStrength(signal),
            });
        }
        Ok(networks)
    }

    /// Finds and connects to a hidden network for the first time.
    ///
    /// Only hidden networks of type `psk` and `open` are supported. The
    /// daemon reports `net.connman.iwd.NotFound` if no network with the
    /// given SSID is found, and `net.connman.iwd.ServiceSetOverlap` if both
    /// an open and a pre-shared-key network carry it. Once provisioned,
    /// future connections should go through [`Network::connect`].
    pub async fn connect_hidden_network(&self, ssid: &str) -> Result<()> {
        debug!("connecting to hidden network '{ssid}'");
        self.iwd
            .call(
                self.path.as_str(),
                Self::INTERFACE,
                "ConnectHiddenNetwork",
                &(ssid,),
            )
            .await?;
        Ok(())
    }

    /// Returns low-level diagnostics of the current connection.
    ///
    /// The values are volatile and their key set depends on the daemon's
    /// state and version; see [`StationDiagnostics`].
    pub async fn get_diagnostics(&self) -> Result<StationDiagnostics> {
        let reply = self
            .iwd
            .call(
                self.path.as_str(),
                interface::STATION_DIAGNOSTIC,
                "GetDiagnostics",
                &(),
            )
            .await?;
        let props: HashMap<String, OwnedValue> = dbus::decode_reply(&reply)?;
        decode_structured(&props)
    }
}
