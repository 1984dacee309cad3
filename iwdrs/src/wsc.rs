use log::debug;
use zvariant::OwnedObjectPath;

use crate::Result;
use crate::constants::interface;
use crate::dbus;
use crate::iwd::Iwd;

/// WSC (Wi-Fi Simple Configuration, formerly WPS) helper.
///
/// Lives on the same object path as a station; obtained through
/// [`Iwd::wsc`](crate::Iwd::wsc).
#[derive(Debug, Clone)]
pub struct Wsc<'a> {
    pub path: OwnedObjectPath,
    iwd: &'a Iwd,
}

impl<'a> Wsc<'a> {
    pub(crate) fn new(path: OwnedObjectPath, iwd: &'a Iwd) -> Self {
        Self { path, iwd }
    }

    /// Starts WSC configuration in push-button mode.
    ///
    /// Any connected network on the device is disconnected and scanning
    /// commences to find the access point in push-button mode. If multiple
    /// access points are found, the daemon reports
    /// `net.connman.iwd.SessionOverlap`. Returns once the configuration has
    /// completed and the network has been connected.
    pub async fn push_button(&self) -> Result<()> {
        debug!("starting push-button configuration on {}", self.path.as_str());
        self.iwd
            .call(
                self.path.as_str(),
                interface::SIMPLE_CONFIGURATION,
                "PushButton",
                &(),
            )
            .await?;
        Ok(())
    }

    /// Generates a random 8-digit PIN with an included check digit,
    /// suitable for most user interfaces.
    pub async fn generate_pin(&self) -> Result<String> {
        let reply = self
            .iwd
            .call(
                self.path.as_str(),
                interface::SIMPLE_CONFIGURATION,
                "GeneratePin",
                &(),
            )
            .await?;
        dbus::decode_reply(&reply)
    }

    /// Starts WSC configuration in PIN mode.
    ///
    /// If the daemon's WSC configuration says the device has no display, a
    /// static PIN from its main.conf is used and `pin` is ignored.
    /// Otherwise `pin` is used; it can come from [`Wsc::generate_pin`] or
    /// be user-specified. Returns once the configuration has completed and
    /// the network has been connected.
    pub async fn start_pin(&self, pin: &str) -> Result<()> {
        self.iwd
            .call(
                self.path.as_str(),
                interface::SIMPLE_CONFIGURATION,
                "StartPin",
                &(pin,),
            )
            .await?;
        Ok(())
    }

    /// Aborts any ongoing WSC operation.
    ///
    /// The daemon reports `net.connman.iwd.NotAvailable` if no operation is
    /// in progress.
    pub async fn cancel(&self) -> Result<()> {
        self.iwd
            .call(
                self.path.as_str(),
                interface::SIMPLE_CONFIGURATION,
                "Cancel",
                &(),
            )
            .await?;
        Ok(())
    }
}
