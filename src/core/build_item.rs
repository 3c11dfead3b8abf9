use crate::models::collection::{CollectionItem, ItemBody, ItemRequest, ItemUrl};
use crate::models::endpoint_descriptor::EndpointDescriptor;
use crate::models::error::BuildError;

const ITEM_PROTOCOL: &str = "http";
const ITEM_HOST: &str = "localhost";

/// Splits a request path on `/`, dropping empty segments so a leading or
/// doubled slash does not produce `""` entries.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a descriptor into the item shape Postman stores: header list empty,
/// the body sent raw as compact JSON, and the url pointed at localhost.
pub fn build_item(endpoint: &EndpointDescriptor) -> Result<CollectionItem, BuildError> {
    let raw = serde_json::to_string(&endpoint.body).map_err(|source| BuildError::Encode {
        name: endpoint.name.clone(),
        source,
    })?;
    Ok(CollectionItem {
        name: endpoint.name.clone(),
        request: ItemRequest {
            method: endpoint.method,
            header: Vec::new(),
            body: ItemBody {
                mode: "raw".to_string(),
                raw,
            },
            url: ItemUrl {
                raw: endpoint.path.clone(),
                protocol: ITEM_PROTOCOL.to_string(),
                host: vec![ITEM_HOST.to_string()],
                path: path_segments(&endpoint.path),
            },
        },
    })
}
