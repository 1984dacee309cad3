//! Bridging of the bus's self-describing variant values to native types.
//!
//! Two access patterns cross the dynamic/static boundary, and they are the
//! only places type erasure is allowed:
//!
//! - [`PropertyMap`]: strict per-key assertions over a `Properties.GetAll`
//!   reply. A missing mandatory key or a wire-type mismatch fails loudly at
//!   entity construction time instead of propagating a wrong value.
//! - [`decode_structured`]: best-effort decode of an `a{sv}` payload into a
//!   serde record. Keys unknown to the record are dropped, keys absent from
//!   the payload leave their field at `None`, and integer widths are
//!   normalized, so client and daemon can evolve independently.

use std::collections::HashMap;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use zvariant::{OwnedValue, Value};

use crate::Result;
use crate::models::IwdError;

/// A property snapshot fetched from one object, consumed key by key while
/// constructing the typed entity.
pub(crate) struct PropertyMap(HashMap<String, OwnedValue>);

impl PropertyMap {
    pub(crate) fn new(props: HashMap<String, OwnedValue>) -> Self {
        Self(props)
    }

    /// Removes a mandatory property, asserting its wire type.
    pub(crate) fn take<T>(&mut self, key: &'static str) -> Result<T>
    where
        T: TryFrom<OwnedValue>,
        T::Error: Into<zvariant::Error>,
    {
        let value = self
            .0
            .remove(key)
            .ok_or(IwdError::MissingProperty { key })?;
        T::try_from(value).map_err(|e| IwdError::PropertyType {
            key,
            source: e.into(),
        })
    }

    /// Removes an optional property.
    ///
    /// Key absence is the wire-level null marker; a present value still has
    /// its type asserted.
    pub(crate) fn take_optional<T>(&mut self, key: &'static str) -> Result<Option<T>>
    where
        T: TryFrom<OwnedValue>,
        T::Error: Into<zvariant::Error>,
    {
        match self.0.remove(key) {
            None => Ok(None),
            Some(value) => T::try_from(value).map(Some).map_err(|e| IwdError::PropertyType {
                key,
                source: e.into(),
            }),
        }
    }

    /// Removes a mandatory string property and parses it into one of the
    /// daemon's closed string enumerations.
    pub(crate) fn take_parsed<T>(&mut self, key: &'static str) -> Result<T>
    where
        T: FromStr<Err = IwdError>,
    {
        self.take::<String>(key)?.parse()
    }
}

/// Decodes a variant dictionary into a typed record, best-effort.
///
/// The payload is transcoded through JSON so that the record's serde
/// derives decide the final shape: unknown keys are ignored, missing keys
/// fall back to the field default, and differing integer widths coerce.
pub(crate) fn decode_structured<T>(props: &HashMap<String, OwnedValue>) -> Result<T>
where
    T: DeserializeOwned,
{
    let mut map = serde_json::Map::with_capacity(props.len());
    for (key, value) in props {
        map.insert(key.clone(), json_from_value(value));
    }
    serde_json::from_value(serde_json::Value::Object(map)).map_err(IwdError::from)
}

/// Converts one variant value into its JSON representation.
///
/// Scalars map directly, nested variants unwrap, containers recurse.
/// Values with no JSON representation (file descriptors) become null.
fn json_from_value(value: &Value<'_>) -> serde_json::Value {
    match value {
        Value::U8(v) => (*v).into(),
        Value::Bool(v) => (*v).into(),
        Value::I16(v) => (*v).into(),
        Value::U16(v) => (*v).into(),
        Value::I32(v) => (*v).into(),
        Value::U32(v) => (*v).into(),
        Value::I64(v) => (*v).into(),
        Value::U64(v) => (*v).into(),
        Value::F64(v) => (*v).into(),
        Value::Str(v) => v.as_str().into(),
        Value::Signature(v) => v.to_string().into(),
        Value::ObjectPath(v) => v.as_str().into(),
        Value::Value(inner) => json_from_value(inner),
        Value::Array(items) => items
            .iter()
            .map(json_from_value)
            .collect::<Vec<_>>()
            .into(),
        Value::Dict(_) => value
            .try_to_owned()
            .ok()
            .and_then(|owned| HashMap::<String, OwnedValue>::try_from(owned).ok())
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), json_from_value(entry)))
                    .collect::<serde_json::Map<String, serde_json::Value>>()
                    .into()
            })
            .unwrap_or(serde_json::Value::Null),
        Value::Structure(fields) => fields
            .fields()
            .iter()
            .map(json_from_value)
            .collect::<Vec<_>>()
            .into(),
        _ => serde_json::Value::Null,
    }
}
