// Item endpoints

use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::Item;

impl HigecoClient {
    /// List the items (parameters) of a log.
    ///
    /// `GET api/v1/plants/{plant}/devices/{device}/logs/{log}/items`
    pub async fn list_items(&self, plant: i64, device: &str, log: i64) -> Result<Vec<Item>, Error> {
        let url = self.api_url(&format!("plants/{plant}/devices/{device}/logs/{log}/items"));
        debug!(plant, device, log, "listing items");
        self.get(url).await
    }

    /// Get a single item description.
    ///
    /// `GET api/v1/plants/{plant}/devices/{device}/logs/{log}/items/{item}`
    pub async fn get_item(
        &self,
        plant: i64,
        device: &str,
        log: i64,
        item: i64,
    ) -> Result<Item, Error> {
        let url = self.api_url(&format!(
            "plants/{plant}/devices/{device}/logs/{log}/items/{item}"
        ));
        debug!(plant, device, log, item, "fetching item");
        self.get(url).await
    }
}
