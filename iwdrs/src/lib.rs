//! A Rust client library for the iwd wireless daemon over D-Bus.
//!
//! iwd publishes a tree of objects on the system bus — adapters, devices,
//! stations, networks, known networks, a WSC helper and a daemon status
//! object. This crate discovers those objects, materializes them as typed
//! snapshots, and relays method calls back to the daemon:
//!
//! - Listing adapters, devices, stations, networks and saved networks
//! - Scanning and connecting, including hidden networks and WSC flows
//! - Reading connection diagnostics and daemon status
//!
//! # Example
//!
//! ```no_run
//! use iwdrs::Iwd;
//!
//! # async fn example() -> iwdrs::Result<()> {
//! let iwd = Iwd::new().await?;
//!
//! for station in iwd.stations().await? {
//!     station.scan().await?;
//!     for entry in station.get_ordered_networks().await? {
//!         println!(
//!             "{} ({:.0} dBm)",
//!             entry.network.name,
//!             entry.signal_strength.dbm()
//!         );
//!     }
//! }
//!
//! iwd.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! Every entity is an immutable snapshot of one object's properties taken
//! at construction time; refreshing state means constructing a new entity
//! (typically by listing again). Entities borrow the [`Iwd`] facade, which
//! owns the bus connection, to issue further calls.
//!
//! # Error Handling
//!
//! All operations return `Result<T, IwdError>`. The error distinguishes
//! transport failures, daemon-reported errors (with their D-Bus name, e.g.
//! `net.connman.iwd.NotFound`, preserved verbatim), and decode failures.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade. Add a logging
//! implementation like `env_logger` to see output.

// Internal implementation modules
mod dbus;
mod objects;
mod variant;

// Public API modules
pub mod constants;
pub mod models;

// Entity types, one per daemon interface
mod adapter;
mod daemon;
mod device;
mod iwd;
mod known_network;
mod network;
mod station;
mod wsc;

// Re-exported public API
pub use adapter::Adapter;
pub use daemon::Daemon;
pub use device::Device;
pub use iwd::Iwd;
pub use known_network::KnownNetwork;
pub use models::{
    ConnectionState, DaemonInfo, DeviceMode, IwdError, NetworkType, SignalStrength,
    StationDiagnostics,
};
pub use network::Network;
pub use objects::RemoteObject;
pub use station::{NetworkWithSignal, Station};
pub use wsc::Wsc;

/// A specialized `Result` type for iwd operations.
pub type Result<T> = std::result::Result<T, IwdError>;
