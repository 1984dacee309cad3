use iwdrs::constants::error_name;
use iwdrs::{ConnectionState, DaemonInfo, IwdError, StationDiagnostics};
use serde_json::json;
use zbus::names::OwnedErrorName;

fn daemon_error(name: &str, message: &str) -> zbus::Error {
    let reply = zbus::message::Message::method_call("/net/connman/iwd/0/3", "Scan")
        .unwrap()
        .build(&())
        .unwrap();
    zbus::Error::MethodError(
        OwnedErrorName::try_from(name).unwrap(),
        Some(message.to_string()),
        reply,
    )
}

#[test]
fn daemon_error_name_passes_through_verbatim() {
    let err: IwdError = daemon_error("net.connman.iwd.NotFound", "Object not found").into();
    assert!(err.is_daemon(error_name::NOT_FOUND));
    assert_eq!(err.to_string(), "net.connman.iwd.NotFound: Object not found");
}

#[test]
fn service_set_overlap_is_not_collapsed() {
    // Both an open and a psk hidden network carrying the requested SSID.
    let err: IwdError = daemon_error(
        "net.connman.iwd.ServiceSetOverlap",
        "Multiple networks found",
    )
    .into();
    assert!(err.is_daemon(error_name::SERVICE_SET_OVERLAP));
    assert!(!err.is_daemon(error_name::NOT_FOUND));
    assert_eq!(err.daemon_error(), Some("net.connman.iwd.ServiceSetOverlap"));
}

#[test]
fn non_method_errors_classify_as_transport() {
    let err: IwdError = zbus::Error::Failure("connection reset".into()).into();
    assert!(matches!(err, IwdError::Transport(_)));
    assert_eq!(err.daemon_error(), None);
}

#[test]
fn diagnostics_tolerate_unknown_and_missing_keys() {
    let diagnostics: StationDiagnostics = serde_json::from_value(json!({
        "ConnectedBss": "aa:bb:cc:dd:ee:ff",
        "Frequency": 5180,
        "RSSI": -52,
        "AverageRSSI": -54,
        "RxMCS": 9,
        "Security": "WPA2-Personal",
        // A key added by a newer daemon must be ignored.
        "BeamformingSupport": true,
    }))
    .unwrap();

    assert_eq!(diagnostics.connected_bss.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
    assert_eq!(diagnostics.frequency, Some(5180));
    assert_eq!(diagnostics.rssi, Some(-52));
    assert_eq!(diagnostics.average_rssi, Some(-54));
    assert_eq!(diagnostics.rx_mcs, Some(9));
    assert_eq!(diagnostics.security.as_deref(), Some("WPA2-Personal"));
    // Keys the daemon did not send stay at their zero value.
    assert_eq!(diagnostics.channel, None);
    assert_eq!(diagnostics.tx_bitrate, None);
}

#[test]
fn diagnostics_decode_both_rate_key_spellings() {
    let old: StationDiagnostics =
        serde_json::from_value(json!({ "RxRate": 8667, "TxRate": 7800 })).unwrap();
    assert_eq!(old.rx_rate, Some(8667));
    assert_eq!(old.tx_rate, Some(7800));

    let new: StationDiagnostics =
        serde_json::from_value(json!({ "RxBitrate": 8667, "TxBitrate": 7800 })).unwrap();
    assert_eq!(new.rx_bitrate, Some(8667));
    assert_eq!(new.tx_bitrate, Some(7800));
}

#[test]
fn daemon_info_decodes_wire_keys() {
    let info: DaemonInfo = serde_json::from_value(json!({
        "Version": "2.19",
        "StateDirectory": "/var/lib/iwd",
        "NetworkConfigurationEnabled": false,
    }))
    .unwrap();
    assert_eq!(info.version.as_deref(), Some("2.19"));
    assert_eq!(info.state_directory.as_deref(), Some("/var/lib/iwd"));
    assert_eq!(info.network_configuration_enabled, Some(false));
}

#[test]
fn station_states_cover_the_daemon_set() {
    for (wire, state) in [
        ("connected", ConnectionState::Connected),
        ("disconnected", ConnectionState::Disconnected),
        ("connecting", ConnectionState::Connecting),
        ("disconnecting", ConnectionState::Disconnecting),
        ("roaming", ConnectionState::Roaming),
    ] {
        assert_eq!(wire.parse::<ConnectionState>().unwrap(), state);
    }
    assert!("associating".parse::<ConnectionState>().is_err());
}
