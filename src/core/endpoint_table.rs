use lazy_static::lazy_static;
use serde_json::json;
use crate::models::endpoint_descriptor::{EndpointDescriptor, HttpMethod};
use crate::models::endpoint_descriptor::HttpMethod::{Delete, Get, Post, Put};

fn endpoint(name: &str, method: HttpMethod, path: &str, body: serde_json::Value) -> EndpointDescriptor {
    EndpointDescriptor::new(name, method, path, body)
}

// Items are appended in this order and Postman keeps it.
lazy_static! {
    static ref COMMERCE_ENDPOINTS: Vec<EndpointDescriptor> = vec![
        // auth
        endpoint("Register User", Post, "/api/auth/register", json!({"username": "example", "password": "password123"})),
        endpoint("Login User", Post, "/api/auth/login", json!({"username": "example", "password": "password123"})),
        endpoint("Logout User", Post, "/api/auth/logout", json!({})),
        // products
        endpoint("Get All Products", Get, "/api/products", json!({})),
        endpoint("Get Product by ID", Get, "/api/products/:id", json!({})),
        endpoint("Create Product", Post, "/api/products", json!({"name": "New Product", "price": 100})),
        endpoint("Update Product", Put, "/api/products/:id", json!({"name": "Updated Product", "price": 150})),
        endpoint("Delete Product", Delete, "/api/products/:id", json!({})),
        // orders
        endpoint("Get All Orders", Get, "/api/orders", json!({})),
        endpoint("Get Order by ID", Get, "/api/orders/:id", json!({})),
        endpoint("Create Order", Post, "/api/orders", json!({"product_id": 1, "quantity": 2})),
        endpoint("Update Order", Put, "/api/orders/:id", json!({"status": "shipped"})),
        endpoint("Delete Order", Delete, "/api/orders/:id", json!({})),
        // retail pos
        endpoint("Retail POS - Start Transaction", Post, "/api/retail/pos/start", json!({"transaction_id": "tx123"})),
        endpoint(
            "Retail POS - Add Item",
            Post,
            "/api/retail/pos/add-item",
            json!({"transaction_id": "tx123", "product_id": 1, "quantity": 2}),
        ),
        endpoint(
            "Retail POS - Complete Transaction",
            Post,
            "/api/retail/pos/complete",
            json!({"transaction_id": "tx123", "payment_method": "card"}),
        ),
        // restaurant pos
        endpoint(
            "Restaurant POS - Create Order",
            Post,
            "/api/restaurant/pos/create-order",
            json!({"table_id": 1, "items": [{"product_id": 1, "quantity": 2}]}),
        ),
        endpoint(
            "Restaurant POS - Update Order",
            Put,
            "/api/restaurant/pos/update-order/:order_id",
            json!({"items": [{"product_id": 1, "quantity": 3}]}),
        ),
        endpoint(
            "Restaurant POS - Close Order",
            Post,
            "/api/restaurant/pos/close-order",
            json!({"order_id": "order123", "payment_method": "cash"}),
        ),
    ];
}

/// The commerce API surface the collection is built from.
pub fn commerce_endpoints() -> &'static [EndpointDescriptor] {
    &COMMERCE_ENDPOINTS
}
