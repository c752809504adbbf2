//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProduct, Product, ProductFilter, SeedOutcome};
use crate::repository::ProductRepository;
use crate::seed;

/// Hard cap on list results; larger requests are silently reduced
pub const MAX_LIST_LIMIT: i64 = 100;

/// Catalog service providing business logic operations
///
/// The service layer handles validation, limit clamping, and orchestrates
/// repository operations. The repository is optional so the service can run
/// without a configured store; data-touching operations then fail with
/// `CatalogError::StoreUnavailable`.
pub struct CatalogService<R: ProductRepository> {
    repository: Option<Arc<R>>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Some(Arc::new(repository)),
        }
    }

    /// Create a CatalogService without a store
    pub fn disconnected() -> Self {
        Self { repository: None }
    }

    /// Whether a store has been configured
    pub fn has_store(&self) -> bool {
        self.repository.is_some()
    }

    fn store(&self) -> CatalogResult<&Arc<R>> {
        self.repository
            .as_ref()
            .ok_or(CatalogError::StoreUnavailable)
    }

    /// List products with an optional category filter
    ///
    /// The limit is clamped to `MAX_LIST_LIMIT`; non-positive limits short
    /// circuit to an empty list without touching the store.
    #[instrument(skip(self))]
    pub async fn list_products(&self, mut filter: ProductFilter) -> CatalogResult<Vec<Product>> {
        let store = self.store()?;

        if filter.limit <= 0 {
            return Ok(Vec::new());
        }
        filter.limit = filter.limit.min(MAX_LIST_LIMIT);

        store.list(filter).await
    }

    /// Validate and insert a new product, returning the store-assigned id
    #[instrument(skip(self, input), fields(product_title = %input.title))]
    pub async fn create_product(&self, input: CreateProduct) -> CatalogResult<String> {
        let store = self.store()?;

        input
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        store.insert(Product::from(input)).await
    }

    /// Seed the sample catalog if the collection is empty
    ///
    /// The emptiness check and the insert are separate operations, so two
    /// concurrent seeds can both pass the check and insert twice.
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> CatalogResult<SeedOutcome> {
        let store = self.store()?;

        let existing = store.count().await?;
        if existing > 0 {
            return Ok(SeedOutcome {
                ok: true,
                message: "Products already exist".to_string(),
                count: existing,
            });
        }

        store.insert_many(seed::sample_products()).await?;
        let count = store.count().await?;

        Ok(SeedOutcome {
            ok: true,
            message: "Seeded sample Karachi styles".to_string(),
            count,
        })
    }
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    use crate::repository::MockProductRepository;

    fn sample_input() -> CreateProduct {
        CreateProduct {
            title: "Men's Kurta - Old City Olive".to_string(),
            description: "Classic cotton kurta".to_string(),
            price: 24.99,
            category: "Men".to_string(),
            in_stock: true,
            image: None,
        }
    }

    #[tokio::test]
    async fn list_clamps_limit_to_maximum() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|filter| filter.limit == MAX_LIST_LIMIT)
            .returning(|_| Ok(Vec::new()));

        let service = CatalogService::new(repo);
        let filter = ProductFilter {
            category: None,
            limit: 500,
        };

        assert!(service.list_products(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_passes_category_and_default_limit_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .withf(|filter| filter.category.as_deref() == Some("Kids") && filter.limit == 50)
            .returning(|_| Ok(Vec::new()));

        let service = CatalogService::new(repo);
        let filter = ProductFilter {
            category: Some("Kids".to_string()),
            limit: 50,
        };

        assert!(service.list_products(filter).await.is_ok());
    }

    #[tokio::test]
    async fn list_with_nonpositive_limit_skips_the_store() {
        // No expectations set, so any repository call would panic.
        let repo = MockProductRepository::new();
        let service = CatalogService::new(repo);

        let filter = ProductFilter {
            category: None,
            limit: 0,
        };
        assert!(service.list_products(filter).await.unwrap().is_empty());

        let filter = ProductFilter {
            category: None,
            limit: -5,
        };
        assert!(service.list_products(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn operations_fail_without_a_store() {
        let service = CatalogService::<MockProductRepository>::disconnected();

        assert!(matches!(
            service.list_products(ProductFilter::default()).await,
            Err(CatalogError::StoreUnavailable)
        ));
        assert!(matches!(
            service.create_product(sample_input()).await,
            Err(CatalogError::StoreUnavailable)
        ));
        assert!(matches!(
            service.seed_products().await,
            Err(CatalogError::StoreUnavailable)
        ));
    }

    #[tokio::test]
    async fn create_returns_the_assigned_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .withf(|product| product.id.is_none() && product.title.starts_with("Men's Kurta"))
            .returning(|_| Ok("65f1c0ffee0ddba11ad0beef".to_string()));

        let service = CatalogService::new(repo);
        let id = service.create_product(sample_input()).await.unwrap();
        assert_eq!(id, "65f1c0ffee0ddba11ad0beef");
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_before_persisting() {
        // No insert expectation, so a call through to the store would panic.
        let repo = MockProductRepository::new();
        let service = CatalogService::new(repo);

        let mut input = sample_input();
        input.title = String::new();

        assert!(matches!(
            service.create_product(input).await,
            Err(CatalogError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn seed_is_a_noop_when_products_exist() {
        let mut repo = MockProductRepository::new();
        repo.expect_count().returning(|| Ok(4));

        let service = CatalogService::new(repo);
        let outcome = service.seed_products().await.unwrap();

        assert!(outcome.ok);
        assert_eq!(outcome.message, "Products already exist");
        assert_eq!(outcome.count, 4);
    }

    #[tokio::test]
    async fn seed_inserts_the_sample_catalog_when_empty() {
        let mut repo = MockProductRepository::new();
        let mut seq = Sequence::new();

        repo.expect_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(0));
        repo.expect_insert_many()
            .withf(|products| products.len() == 6)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|products| Ok(products.len() as u64));
        repo.expect_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(6));

        let service = CatalogService::new(repo);
        let outcome = service.seed_products().await.unwrap();

        assert!(outcome.ok);
        assert_eq!(outcome.message, "Seeded sample Karachi styles");
        assert_eq!(outcome.count, 6);
    }
}
