//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    /// Catalog identifier, unique within the catalog
    #[serde(rename = "ID")]
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "How to avoid a climate disaster")]
    pub title: String,
    #[schema(example = "Bill Gates")]
    pub author: String,
    /// Unit price, not validated
    #[schema(example = 24.99)]
    pub price: f64,
}

impl Book {
    pub fn new(id: i64, title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            price,
        }
    }
}
