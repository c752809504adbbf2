use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{Product, ProductFilter};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for the catalog.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a single product, returning the store-assigned identifier
    async fn insert(&self, product: Product) -> CatalogResult<String>;

    /// Insert a batch of products, returning how many were inserted
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<u64>;

    /// List products matching a filter, in the store's natural order
    async fn list(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>>;

    /// Count all products in the collection
    async fn count(&self) -> CatalogResult<u64>;
}
