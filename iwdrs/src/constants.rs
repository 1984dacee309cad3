//! Constants for the iwd D-Bus API.
//!
//! Names of the well-known service, its object paths, the interfaces the
//! daemon publishes, and the error names it reports.

/// Well-known bus name of the iwd daemon.
pub const IWD_SERVICE: &str = "net.connman.iwd";

/// Object path of the daemon object.
pub const IWD_DAEMON_PATH: &str = "/net/connman/iwd";

/// Path the daemon's object manager answers on.
pub(crate) const OBJECT_MANAGER_PATH: &str = "/";

/// iwd interface names.
pub mod interface {
    pub const ADAPTER: &str = "net.connman.iwd.Adapter";
    pub const DEVICE: &str = "net.connman.iwd.Device";
    pub const STATION: &str = "net.connman.iwd.Station";
    pub const STATION_DIAGNOSTIC: &str = "net.connman.iwd.StationDiagnostic";
    pub const NETWORK: &str = "net.connman.iwd.Network";
    pub const KNOWN_NETWORK: &str = "net.connman.iwd.KnownNetwork";
    pub const DAEMON: &str = "net.connman.iwd.Daemon";
    pub const SIMPLE_CONFIGURATION: &str = "net.connman.iwd.SimpleConfiguration";

    pub(crate) const PROPERTIES: &str = "org.freedesktop.DBus.Properties";
    pub(crate) const OBJECT_MANAGER: &str = "org.freedesktop.DBus.ObjectManager";
}

/// Error names the daemon reports (non-exhaustive).
///
/// Useful with [`IwdError::is_daemon`](crate::IwdError::is_daemon) to match
/// a specific daemon failure.
pub mod error_name {
    pub const NOT_FOUND: &str = "net.connman.iwd.NotFound";
    pub const SERVICE_SET_OVERLAP: &str = "net.connman.iwd.ServiceSetOverlap";
    pub const SESSION_OVERLAP: &str = "net.connman.iwd.SessionOverlap";
    pub const NOT_AVAILABLE: &str = "net.connman.iwd.NotAvailable";
}
