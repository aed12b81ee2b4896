// Device endpoints

use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::Device;

impl HigecoClient {
    /// List the devices installed at a plant.
    ///
    /// `GET api/v1/plants/{plant}/devices`
    pub async fn list_devices(&self, plant: i64) -> Result<Vec<Device>, Error> {
        let url = self.api_url(&format!("plants/{plant}/devices"));
        debug!(plant, "listing devices");
        self.get(url).await
    }

    /// Get a single device description.
    ///
    /// `GET api/v1/plants/{plant}/devices/{device}`
    pub async fn get_device(&self, plant: i64, device: &str) -> Result<Device, Error> {
        let url = self.api_url(&format!("plants/{plant}/devices/{device}"));
        debug!(plant, device, "fetching device");
        self.get(url).await
    }
}
