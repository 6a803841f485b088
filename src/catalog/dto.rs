use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::store::Product;

/// Create body. `price` stays raw JSON so a non-numeric value trips the
/// handler's own validation message instead of a deserializer rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Response for a successful delete: confirmation plus the removed record.
#[derive(Debug, Serialize)]
pub struct DeletedProduct {
    pub message: String,
    pub product: Product,
}
