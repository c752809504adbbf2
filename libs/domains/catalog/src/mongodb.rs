//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::doc,
};
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductFilter};
use crate::repository::ProductRepository;

/// Default collection name for products
pub const PRODUCT_COLLECTION: &str = "product";

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>(PRODUCT_COLLECTION);
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    /// Build a MongoDB filter document from ProductFilter
    fn build_filter(filter: &ProductFilter) -> mongodb::bson::Document {
        match filter.category {
            Some(ref category) => doc! { "category": category },
            None => doc! {},
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_title = %product.title))]
    async fn insert(&self, product: Product) -> CatalogResult<String> {
        let result = self.collection.insert_one(&product).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| {
                CatalogError::Database("insert did not return an ObjectId".to_string())
            })?;

        tracing::info!(product_id = %id, "Product created successfully");
        Ok(id)
    }

    #[instrument(skip(self, products), fields(batch_size = products.len()))]
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<u64> {
        if products.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&products).await?;
        let inserted = result.inserted_ids.len() as u64;

        tracing::info!(inserted, "Products inserted");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        use futures::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        // Natural retrieval order, no sort imposed.
        let options = mongodb::options::FindOptions::builder()
            .limit(filter.limit)
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> CatalogResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_matches_category_exactly() {
        let filter = ProductFilter {
            category: Some("Men".to_string()),
            limit: 50,
        };
        assert_eq!(
            MongoProductRepository::build_filter(&filter),
            doc! { "category": "Men" }
        );
    }

    #[test]
    fn build_filter_is_empty_without_category() {
        let filter = ProductFilter::default();
        assert_eq!(MongoProductRepository::build_filter(&filter), doc! {});
    }
}
