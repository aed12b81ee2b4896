// Log endpoints
//
// Logs are the named data channels recorded by a device.

use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::Log;

impl HigecoClient {
    /// List the logs recorded by a device.
    ///
    /// `GET api/v1/plants/{plant}/devices/{device}/logs`
    pub async fn list_logs(&self, plant: i64, device: &str) -> Result<Vec<Log>, Error> {
        let url = self.api_url(&format!("plants/{plant}/devices/{device}/logs"));
        debug!(plant, device, "listing logs");
        self.get(url).await
    }

    /// Get a single log description.
    ///
    /// `GET api/v1/plants/{plant}/devices/{device}/logs/{log}`
    pub async fn get_log(&self, plant: i64, device: &str, log: i64) -> Result<Log, Error> {
        let url = self.api_url(&format!("plants/{plant}/devices/{device}/logs/{log}"));
        debug!(plant, device, log, "fetching log");
        self.get(url).await
    }
}
