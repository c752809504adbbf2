use mongodb::bson::oid::ObjectId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product entity - represents a product stored in MongoDB
///
/// The identifier is assigned by the store on insert, so it is absent
/// until the document has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Price in the store currency
    pub price: f64,
    /// Free-text category label (e.g. "Men", "Women", "Kids")
    pub category: String,
    /// Whether the product is currently in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl From<CreateProduct> for Product {
    fn from(input: CreateProduct) -> Self {
        Self {
            id: None,
            title: input.title,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
            image: input.image,
        }
    }
}

/// DTO for creating a new product
///
/// Also the surface exposed as a JSON Schema for tooling.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, JsonSchema)]
#[schemars(rename = "Product")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub image: Option<String>,
}

/// Product as returned by the API, with the store identifier as a string
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Store identifier rendered as a hex string
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: product.title,
            description: product.description,
            price: product.price,
            category: product.category,
            in_stock: product.in_stock,
            image: product.image,
        }
    }
}

/// Query filter for listing products
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ProductFilter {
    /// Exact-match category filter
    pub category: Option<String>,
    /// Maximum number of results (values above 100 are reduced to 100)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category: None,
            limit: default_limit(),
        }
    }
}

fn default_limit() -> i64 {
    50
}

/// Response for a successful product creation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedProduct {
    /// Identifier of the newly inserted product
    pub id: String,
    pub ok: bool,
}

/// Outcome of the seed operation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeedOutcome {
    pub ok: bool,
    /// Human-readable summary of what happened
    pub message: String,
    /// Number of products in the collection after the operation
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_product_accepts_valid_payload() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "title": "Men's Kurta",
            "description": "Classic cotton kurta",
            "price": 24.99,
            "category": "Men"
        }))
        .unwrap();

        assert!(input.validate().is_ok());
        assert!(input.in_stock);
        assert!(input.image.is_none());
    }

    #[test]
    fn create_product_rejects_empty_title() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "title": "",
            "description": "No title",
            "price": 9.99,
            "category": "Men"
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn create_product_rejects_negative_price() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "title": "Kurti",
            "description": "Breathable cotton",
            "price": -1.0,
            "category": "Women"
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn product_response_renders_object_id_as_hex() {
        let id = ObjectId::new();
        let product = Product {
            id: Some(id),
            title: "Waistcoat".to_string(),
            description: "Versatile".to_string(),
            price: 34.5,
            category: "Men".to_string(),
            in_stock: true,
            image: None,
        };

        let response = ProductResponse::from(product);
        assert_eq!(response.id, id.to_hex());
    }

    #[test]
    fn product_serializes_without_id_before_insert() {
        let product = Product {
            id: None,
            title: "Kurta".to_string(),
            description: "Cotton".to_string(),
            price: 24.99,
            category: "Men".to_string(),
            in_stock: true,
            image: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn filter_defaults_limit_to_fifty() {
        let filter: ProductFilter = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(filter.limit, 50);
        assert!(filter.category.is_none());
    }
}
