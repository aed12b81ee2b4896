// Plant snapshot aggregation
//
// Walks the plant -> device -> log hierarchy and flattens every "last
// value" into a single name/value map keyed by the caller's requested
// parameter names.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;

impl HigecoClient {
    /// Collect the most recent value of the requested parameters across a
    /// whole plant.
    ///
    /// Refreshes the session if needed, then fetches the last values of
    /// every log of every device, sequentially. When several logs report
    /// the same item name the last one in traversal order wins. Requested
    /// names with no match map to an empty string.
    ///
    /// The `Timestamp` entry carries the `utc` of the last item processed
    /// in traversal order -- not necessarily the newest sample across the
    /// plant. It is omitted when the traversal yields no items at all.
    ///
    /// Any failed intermediate fetch aborts the whole aggregation with
    /// the underlying error; there are no partial results.
    pub async fn snapshot(
        &self,
        plant: i64,
        parameters: &[&str],
    ) -> Result<BTreeMap<String, Value>, Error> {
        self.ensure_fresh().await?;

        let mut collected: BTreeMap<String, Value> = BTreeMap::new();
        let mut last_utc = None;

        for device in self.list_devices(plant).await? {
            for log in self.list_logs(plant, &device.id).await? {
                let last = self.get_last_values(plant, &device.id, log.id).await?;
                for item in last.items {
                    collected.insert(item.name, item.value);
                    last_utc = Some(item.utc);
                }
            }
        }

        debug!(
            plant,
            collected = collected.len(),
            "snapshot traversal complete"
        );

        let mut snapshot = BTreeMap::new();
        if let Some(utc) = last_utc {
            snapshot.insert("Timestamp".to_owned(), Value::from(utc));
        }
        for &name in parameters {
            let value = collected
                .get(name)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            snapshot.insert(name.to_owned(), value);
        }

        Ok(snapshot)
    }
}
