//! Generic discovery of remote objects by interface.

use async_trait::async_trait;
use log::debug;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::dbus::ManagedObjects;
use crate::iwd::Iwd;

/// A typed local proxy for one remote object, constructible from its path.
///
/// `from_path` performs exactly one property round trip, plus one recursive
/// construction per nested sub-entity, and returns an immutable snapshot
/// bound to the facade that issued it.
#[async_trait]
pub trait RemoteObject<'iwd>: Sized {
    /// Interface an object must advertise to be materialized as `Self`.
    const INTERFACE: &'static str;

    /// Fetches the object's properties and builds the typed snapshot.
    async fn from_path(path: OwnedObjectPath, iwd: &'iwd Iwd) -> Result<Self>;
}

/// Materializes every object in the daemon's tree advertising
/// `T::INTERFACE`.
///
/// Fail-fast: the first constructor failure aborts the whole listing.
pub(crate) async fn objects_by_interface<'iwd, T>(iwd: &'iwd Iwd) -> Result<Vec<T>>
where
    T: RemoteObject<'iwd>,
{
    let tree = iwd.managed_objects().await?;
    let paths = paths_implementing(&tree, T::INTERFACE);
    debug!("{} object(s) implement {}", paths.len(), T::INTERFACE);

    let mut objects = Vec::with_capacity(paths.len());
    for path in paths {
        objects.push(T::from_path(path, iwd).await?);
    }
    Ok(objects)
}

/// Selects the paths of all objects advertising `interface`.
///
/// Order is whatever the daemon returned; it is not guaranteed stable
/// across calls.
pub(crate) fn paths_implementing(tree: &ManagedObjects, interface: &str) -> Vec<OwnedObjectPath> {
    tree.iter()
        .filter(|(_, interfaces)| interfaces.contains_key(interface))
        .map(|(path, _)| path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::interface;
    use std::collections::HashMap;
    use zvariant::ObjectPath;

    fn entry(path: &str, interfaces: &[&str]) -> (OwnedObjectPath, HashMap<String, HashMap<String, zvariant::OwnedValue>>) {
        let path = OwnedObjectPath::from(ObjectPath::try_from(path).unwrap());
        let interfaces = interfaces
            .iter()
            .map(|i| ((*i).to_string(), HashMap::new()))
            .collect();
        (path, interfaces)
    }

    fn sample_tree() -> ManagedObjects {
        ManagedObjects::from([
            entry("/net/connman/iwd", &[interface::DAEMON]),
            entry("/net/connman/iwd/0", &[interface::ADAPTER]),
            entry(
                "/net/connman/iwd/0/3",
                &[
                    interface::DEVICE,
                    interface::STATION,
                    interface::SIMPLE_CONFIGURATION,
                ],
            ),
            entry("/net/connman/iwd/0/3/416e74_psk", &[interface::NETWORK]),
        ])
    }

    #[test]
    fn selects_only_advertising_objects() {
        let tree = sample_tree();
        let stations = paths_implementing(&tree, interface::STATION);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].as_str(), "/net/connman/iwd/0/3");
    }

    #[test]
    fn selects_each_interface_of_a_shared_path() {
        // One object may advertise several interfaces; it matches each.
        let tree = sample_tree();
        assert_eq!(paths_implementing(&tree, interface::DEVICE).len(), 1);
        assert_eq!(
            paths_implementing(&tree, interface::SIMPLE_CONFIGURATION).len(),
            1
        );
    }

    #[test]
    fn selects_nothing_for_unadvertised_interface() {
        let tree = sample_tree();
        assert!(paths_implementing(&tree, interface::KNOWN_NETWORK).is_empty());
    }

    #[test]
    fn selection_count_matches_advertising_objects() {
        let mut tree = sample_tree();
        let (path, interfaces) = entry("/net/connman/iwd/1", &[interface::ADAPTER]);
        tree.insert(path, interfaces);

        let adapters = paths_implementing(&tree, interface::ADAPTER);
        assert_eq!(adapters.len(), 2);
        let paths: Vec<_> = adapters.iter().map(|p| p.as_str()).collect();
        assert!(paths.contains(&"/net/connman/iwd/0"));
        assert!(paths.contains(&"/net/connman/iwd/1"));
    }
}
