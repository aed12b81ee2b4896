// Data endpoints
//
// Recorded samples (getLogData) and most recent values (getLastValue).
// These use a flat path scheme rather than the nested resource paths.
// Log data rows are loosely typed because the column set depends on the
// log configuration.

use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::{LastValueItem, LastValues};

impl HigecoClient {
    /// Recorded samples for a whole log.
    ///
    /// `GET api/v1/getLogData/{plant}/{device}/{log}`
    pub async fn get_log_data(
        &self,
        plant: i64,
        device: &str,
        log: i64,
    ) -> Result<serde_json::Value, Error> {
        let url = self.api_url(&format!("getLogData/{plant}/{device}/{log}"));
        debug!(plant, device, log, "fetching log data");
        self.get(url).await
    }

    /// Recorded samples for a single item.
    ///
    /// `GET api/v1/getLogData/{plant}/{device}/{log}/{item}`
    pub async fn get_item_data(
        &self,
        plant: i64,
        device: &str,
        log: i64,
        item: i64,
    ) -> Result<serde_json::Value, Error> {
        let url = self.api_url(&format!("getLogData/{plant}/{device}/{log}/{item}"));
        debug!(plant, device, log, item, "fetching item data");
        self.get(url).await
    }

    /// Most recent value of every item in a log.
    ///
    /// `GET api/v1/getLastValue/{plant}/{device}/{log}`
    pub async fn get_last_values(
        &self,
        plant: i64,
        device: &str,
        log: i64,
    ) -> Result<LastValues, Error> {
        let url = self.api_url(&format!("getLastValue/{plant}/{device}/{log}"));
        debug!(plant, device, log, "fetching last values");
        self.get(url).await
    }

    /// Most recent value of a single item.
    ///
    /// `GET api/v1/getLastValue/{plant}/{device}/{log}/{item}`
    pub async fn get_last_value(
        &self,
        plant: i64,
        device: &str,
        log: i64,
        item: i64,
    ) -> Result<LastValueItem, Error> {
        let url = self.api_url(&format!("getLastValue/{plant}/{device}/{log}/{item}"));
        debug!(plant, device, log, item, "fetching last value");
        self.get(url).await
    }
}
