use tracing::{debug, info};
use crate::core::check_endpoints_names::check_endpoints_names;
use crate::core::postman_api::CollectionsApi;
use crate::models::endpoint_descriptor::EndpointDescriptor;
use crate::models::error::BuildError;
use crate::models::result::BuildReport;

/// Creates one collection and appends every endpoint to it, one request at a
/// time and in table order. Nothing is rolled back on failure.
pub struct CollectionBuilder<A> {
    api: A,
}

impl<A: CollectionsApi> CollectionBuilder<A> {
    pub fn new(api: A) -> Self {
        CollectionBuilder { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn run(&self, collection_name: &str, endpoints: &[EndpointDescriptor]) -> Result<BuildReport, BuildError> {
        check_endpoints_names(endpoints)?;
        let collection_id = self.api.create_collection(collection_name).await?;
        info!(%collection_id, "Collection created successfully");

        let total = endpoints.len();
        for (added, endpoint) in endpoints.iter().enumerate() {
            debug!(name = %endpoint.name, method = %endpoint.method, path = %endpoint.path, "adding item");
            if let Err(e) = self.api.add_item(&collection_id, endpoint).await {
                return Err(BuildError::PartialCollection {
                    collection_id,
                    added,
                    total,
                    source: Box::new(e),
                });
            }
        }
        info!(items = total, "All endpoints added successfully");
        Ok(BuildReport {
            collection_id,
            items_added: total,
        })
    }
}
