use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// General network connection state of a station, as reported by the daemon.
///
/// The daemon classifies the state into this closed set; the client only
/// observes it and never drives transitions itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Disconnected,
    Connecting,
    Disconnecting,
    Roaming,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Disconnecting => "disconnecting",
            Self::Roaming => "roaming",
        }
    }
}

impl FromStr for ConnectionState {
    type Err = IwdError;

    fn from_str(s: &str) -> Result<Self, IwdError> {
        match s {
            "connected" => Ok(Self::Connected),
            "disconnected" => Ok(Self::Disconnected),
            "connecting" => Ok(Self::Connecting),
            "disconnecting" => Ok(Self::Disconnecting),
            "roaming" => Ok(Self::Roaming),
            other => Err(IwdError::UnknownValue {
                what: "connection state",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for ConnectionState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Security type of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    Open,
    Wep,
    Psk,
    /// WPA-Enterprise (802.1X).
    Eap,
}

impl NetworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Wep => "wep",
            Self::Psk => "psk",
            Self::Eap => "8021x",
        }
    }
}

impl FromStr for NetworkType {
    type Err = IwdError;

    fn from_str(s: &str) -> Result<Self, IwdError> {
        match s {
            "open" => Ok(Self::Open),
            "wep" => Ok(Self::Wep),
            "psk" => Ok(Self::Psk),
            "8021x" => Ok(Self::Eap),
            other => Err(IwdError::UnknownValue {
                what: "network type",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating mode of a device or adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    AdHoc,
    Station,
    AccessPoint,
}

impl DeviceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdHoc => "ad-hoc",
            Self::Station => "station",
            Self::AccessPoint => "ap",
        }
    }
}

impl FromStr for DeviceMode {
    type Err = IwdError;

    fn from_str(s: &str) -> Result<Self, IwdError> {
        match s {
            "ad-hoc" => Ok(Self::AdHoc),
            "station" => Ok(Self::Station),
            "ap" => Ok(Self::AccessPoint),
            other => Err(IwdError::UnknownValue {
                what: "device mode",
                value: other.to_string(),
            }),
        }
    }
}

impl Display for DeviceMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum signal strength of a network, in units of 100 * dBm.
///
/// Ranges from 0 (strongest) to -10000 (weakest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignalStrength(pub i16);

impl SignalStrength {
    /// Signal strength in dBm.
    pub fn dbm(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// Daemon status and configuration, as returned by `Daemon::get_info`.
///
/// All fields are best-effort: the daemon may omit keys it does not
/// populate and may report keys this struct does not know about; both are
/// tolerated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DaemonInfo {
    /// iwd release version.
    pub version: Option<String>,
    /// Absolute path to the daemon's state directory.
    pub state_directory: Option<String>,
    /// Whether daemon-side network configuration is enabled (see iwd(8)).
    pub network_configuration_enabled: Option<bool>,
}

/// Low-level diagnostics of a station's current connection, as returned by
/// `Station::get_diagnostics`.
///
/// The key set is volatile: values come and go with connection state and
/// daemon version, so every field is optional. The daemon renamed the
/// rate keys across releases; both spellings are decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StationDiagnostics {
    /// Average RSSI of the currently connected BSS.
    #[serde(rename = "AverageRSSI")]
    pub average_rssi: Option<i32>,
    /// WLAN channel number of the currently connected BSS.
    pub channel: Option<u32>,
    /// Address of the currently connected BSS.
    pub connected_bss: Option<String>,
    /// Frequency of the currently connected BSS, in MHz.
    pub frequency: Option<u32>,
    /// Pairwise cipher chosen for this connection.
    pub pairwise_cipher: Option<String>,
    /// RSSI of the currently connected BSS.
    #[serde(rename = "RSSI")]
    pub rssi: Option<i32>,
    /// Receive rate in 100 kbit/s.
    pub rx_rate: Option<u32>,
    /// Receive rate in 100 kbit/s.
    pub rx_bitrate: Option<u32>,
    /// Receiving MCS index.
    #[serde(rename = "RxMCS")]
    pub rx_mcs: Option<u32>,
    /// Phy technology in use for reception (802.11n, 802.11ac, 802.11ax).
    pub rx_mode: Option<String>,
    /// Security chosen for the connection.
    pub security: Option<String>,
    /// Transmission rate in 100 kbit/s.
    pub tx_rate: Option<u32>,
    /// Transmission rate in 100 kbit/s.
    pub tx_bitrate: Option<u32>,
    /// Transmitting MCS index.
    #[serde(rename = "TxMCS")]
    pub tx_mcs: Option<u32>,
    /// Phy technology in use for transmission.
    pub tx_mode: Option<String>,
}

/// Errors surfaced by this library.
///
/// Three kinds are distinguished so callers can react appropriately: the
/// transport failed (retryable), the daemon executed the call and reported
/// a named failure (show it to the user), or a reply could not be coerced
/// to its expected shape (a client/protocol bug).
#[derive(Debug, Error)]
pub enum IwdError {
    /// The underlying bus call failed before the daemon answered.
    #[error("D-Bus transport error: {0}")]
    Transport(zbus::Error),

    /// The daemon executed the call and reported a named failure.
    ///
    /// `name` and `message` are preserved verbatim, e.g.
    /// `net.connman.iwd.NotFound`.
    #[error("{name}: {message}")]
    Daemon { name: String, message: String },

    /// A mandatory property was absent from a property snapshot.
    #[error("required property '{key}' is missing")]
    MissingProperty { key: &'static str },

    /// A property value did not have the wire type its interface declares.
    #[error("property '{key}' has an unexpected type: {source}")]
    PropertyType {
        key: &'static str,
        source: zvariant::Error,
    },

    /// A value outside one of the daemon's closed string enumerations.
    #[error("unrecognized {what} '{value}'")]
    UnknownValue { what: &'static str, value: String },

    /// A reply body could not be deserialized into its expected shape.
    #[error("malformed reply payload: {0}")]
    MalformedReply(zbus::Error),

    /// A structured dictionary reply could not be decoded.
    #[error("structured decode failed: {0}")]
    StructuredDecode(#[from] serde_json::Error),

    /// An expected object is not present on the bus.
    #[error("no object implementing {interface} found")]
    MissingObject { interface: &'static str },

    /// The facade's connection has been closed.
    #[error("connection to the daemon is closed")]
    ConnectionClosed,
}

impl IwdError {
    /// Name of the daemon-reported error, if this is one.
    pub fn daemon_error(&self) -> Option<&str> {
        match self {
            Self::Daemon { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this is the daemon error `name`, e.g.
    /// [`error_name::NOT_FOUND`](crate::constants::error_name::NOT_FOUND).
    pub fn is_daemon(&self, name: &str) -> bool {
        self.daemon_error() == Some(name)
    }
}

impl From<zbus::Error> for IwdError {
    fn from(err: zbus::Error) -> Self {
        match err {
            zbus::Error::MethodError(name, message, _) => Self::Daemon {
                name: name.to_string(),
                message: message.unwrap_or_default(),
            },
            other => Self::Transport(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_state_parses_all_values() {
        assert_eq!(
            "connected".parse::<ConnectionState>().unwrap(),
            ConnectionState::Connected
        );
        assert_eq!(
            "disconnected".parse::<ConnectionState>().unwrap(),
            ConnectionState::Disconnected
        );
        assert_eq!(
            "connecting".parse::<ConnectionState>().unwrap(),
            ConnectionState::Connecting
        );
        assert_eq!(
            "disconnecting".parse::<ConnectionState>().unwrap(),
            ConnectionState::Disconnecting
        );
        assert_eq!(
            "roaming".parse::<ConnectionState>().unwrap(),
            ConnectionState::Roaming
        );
    }

    #[test]
    fn connection_state_rejects_unknown_value() {
        let err = "limbo".parse::<ConnectionState>().unwrap_err();
        assert!(matches!(err, IwdError::UnknownValue { .. }));
        assert_eq!(err.to_string(), "unrecognized connection state 'limbo'");
    }

    #[test]
    fn connection_state_display_round_trips() {
        for state in [
            ConnectionState::Connected,
            ConnectionState::Disconnected,
            ConnectionState::Connecting,
            ConnectionState::Disconnecting,
            ConnectionState::Roaming,
        ] {
            assert_eq!(state.to_string().parse::<ConnectionState>().unwrap(), state);
        }
    }

    #[test]
    fn network_type_parses_all_values() {
        assert_eq!("open".parse::<NetworkType>().unwrap(), NetworkType::Open);
        assert_eq!("wep".parse::<NetworkType>().unwrap(), NetworkType::Wep);
        assert_eq!("psk".parse::<NetworkType>().unwrap(), NetworkType::Psk);
        assert_eq!("8021x".parse::<NetworkType>().unwrap(), NetworkType::Eap);
    }

    #[test]
    fn network_type_rejects_unknown_value() {
        assert!(matches!(
            "wpa4".parse::<NetworkType>(),
            Err(IwdError::UnknownValue { .. })
        ));
    }

    #[test]
    fn device_mode_parses_all_values() {
        assert_eq!("ad-hoc".parse::<DeviceMode>().unwrap(), DeviceMode::AdHoc);
        assert_eq!("station".parse::<DeviceMode>().unwrap(), DeviceMode::Station);
        assert_eq!("ap".parse::<DeviceMode>().unwrap(), DeviceMode::AccessPoint);
    }

    #[test]
    fn signal_strength_converts_to_dbm() {
        assert_eq!(SignalStrength(-4500).dbm(), -45.0);
        assert_eq!(SignalStrength(0).dbm(), 0.0);
        assert_eq!(SignalStrength(-10000).dbm(), -100.0);
    }

    #[test]
    fn signal_strength_orders_strongest_first() {
        assert!(SignalStrength(-2000) > SignalStrength(-4500));
    }

    #[test]
    fn transport_error_wraps_zbus_failure() {
        let err: IwdError = zbus::Error::Failure("socket closed".into()).into();
        assert!(matches!(err, IwdError::Transport(_)));
        assert!(err.to_string().contains("socket closed"));
        assert_eq!(err.daemon_error(), None);
    }

    #[test]
    fn daemon_error_helpers_match_by_name() {
        let err = IwdError::Daemon {
            name: "net.connman.iwd.NotFound".into(),
            message: "network not found".into(),
        };
        assert_eq!(err.daemon_error(), Some("net.connman.iwd.NotFound"));
        assert!(err.is_daemon(crate::constants::error_name::NOT_FOUND));
        assert!(!err.is_daemon(crate::constants::error_name::NOT_AVAILABLE));
        assert_eq!(
            err.to_string(),
            "net.connman.iwd.NotFound: network not found"
        );
    }

    #[test]
    fn daemon_info_defaults_to_empty() {
        let info = DaemonInfo::default();
        assert_eq!(info.version, None);
        assert_eq!(info.state_directory, None);
        assert_eq!(info.network_configuration_enabled, None);
    }
}
