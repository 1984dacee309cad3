//! Transport layer over the shared bus connection.
//!
//! Three primitives carry every interaction with the daemon: calling a
//! method on a named object, reading an object's full property set, and
//! fetching the daemon's managed-object tree in one round trip. A fourth,
//! `set_property`, covers the handful of writable properties.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use zbus::Connection;
use zbus::message::Message;
use zvariant::{DynamicType, OwnedObjectPath, OwnedValue, Type, Value};

use crate::Result;
use crate::constants::{IWD_SERVICE, OBJECT_MANAGER_PATH, interface};
use crate::models::IwdError;

/// The daemon's full object tree: path -> interface -> property -> value.
pub(crate) type ManagedObjects =
    HashMap<OwnedObjectPath, HashMap<String, HashMap<String, OwnedValue>>>;

/// Calls `method` on `iface` of the object at `path` and returns the raw
/// reply.
///
/// A daemon-reported error surfaces as [`IwdError::Daemon`] with its name
/// and message preserved verbatim; any other failure is a transport error.
pub(crate) async fn call_method<B>(
    conn: &Connection,
    path: &str,
    iface: &str,
    method: &str,
    body: &B,
) -> Result<Message>
where
    B: Serialize + DynamicType,
{
    conn.call_method(Some(IWD_SERVICE), path, Some(iface), method, body)
        .await
        .map_err(IwdError::from)
}

/// Reads the current values of every property `iface` declares on the
/// object at `path`.
pub(crate) async fn get_all_properties(
    conn: &Connection,
    path: &str,
    iface: &str,
) -> Result<HashMap<String, OwnedValue>> {
    let reply = call_method(conn, path, interface::PROPERTIES, "GetAll", &(iface,)).await?;
    decode_reply(&reply)
}

/// Fetches the daemon's full object tree.
pub(crate) async fn get_managed_objects(conn: &Connection) -> Result<ManagedObjects> {
    let reply = call_method(
        conn,
        OBJECT_MANAGER_PATH,
        interface::OBJECT_MANAGER,
        "GetManagedObjects",
        &(),
    )
    .await?;
    decode_reply(&reply)
}

/// Writes one property through `org.freedesktop.DBus.Properties.Set`.
pub(crate) async fn set_property(
    conn: &Connection,
    path: &str,
    iface: &str,
    property: &str,
    value: Value<'_>,
) -> Result<()> {
    call_method(
        conn,
        path,
        interface::PROPERTIES,
        "Set",
        &(iface, property, value),
    )
    .await?;
    Ok(())
}

/// Deserializes a reply body into its statically expected shape.
pub(crate) fn decode_reply<T>(reply: &Message) -> Result<T>
where
    T: DeserializeOwned + Type,
{
    reply.body().deserialize().map_err(IwdError::MalformedReply)
}
