//! Request payloads for the Postman Collections API (collection format v2.1).

use serde::{Deserialize, Serialize};
use crate::models::endpoint_descriptor::HttpMethod;

pub const COLLECTION_SCHEMA: &str = "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionPayload {
    pub collection: NewCollection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCollection {
    pub info: CollectionInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub name: String,
    pub schema: String,
}

impl CreateCollectionPayload {
    pub fn named(name: &str) -> Self {
        CreateCollectionPayload {
            collection: NewCollection {
                info: CollectionInfo {
                    name: name.to_string(),
                    schema: COLLECTION_SCHEMA.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendItemsPayload {
    pub collection: ItemList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    pub item: Vec<CollectionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub name: String,
    pub request: ItemRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub method: HttpMethod,
    pub header: Vec<ItemHeader>,
    pub body: ItemBody,
    pub url: ItemUrl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemHeader {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBody {
    pub mode: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUrl {
    pub raw: String,
    pub protocol: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}
