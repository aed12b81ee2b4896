// Plant endpoints
//
// Plants are the root of the resource hierarchy; everything else is
// addressed relative to a plant id.

use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::Plant;

impl HigecoClient {
    /// List all plants visible to the authenticated user.
    ///
    /// `GET api/v1/plants`
    pub async fn list_plants(&self) -> Result<Vec<Plant>, Error> {
        let url = self.api_url("plants");
        debug!("listing plants");
        self.get(url).await
    }

    /// Get a single plant description.
    ///
    /// `GET api/v1/plants/{plant}`
    pub async fn get_plant(&self, plant: i64) -> Result<Plant, Error> {
        let url = self.api_url(&format!("plants/{plant}"));
        debug!(plant, "fetching plant");
        self.get(url).await
    }

    /// Ids of every accessible plant.
    ///
    /// Convenience scan over [`list_plants`](Self::list_plants).
    pub async fn plant_ids(&self) -> Result<Vec<i64>, Error> {
        Ok(self.list_plants().await?.into_iter().map(|p| p.id).collect())
    }
}
