//! HTTP handlers for the Catalog API

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{InternalServerErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreateProduct, CreatedProduct, ProductFilter, ProductResponse, SeedOutcome};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, seed_products),
    components(
        schemas(ProductResponse, CreateProduct, CreatedProduct, SeedOutcome),
        responses(ValidationErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/seed", post(seed_products))
        .with_state(shared_service)
}

/// List products with an optional category filter
#[utoipa::path(
    get,
    path = "/products",
    tag = "Catalog",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> CatalogResult<Json<Vec<ProductResponse>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Catalog",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = CreatedProduct),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<Json<CreatedProduct>> {
    let id = service.create_product(input).await?;
    Ok(Json(CreatedProduct { id, ok: true }))
}

/// Seed the sample catalog if it is empty
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Catalog",
    responses(
        (status = 200, description = "Seed outcome", body = SeedOutcome),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seed_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<SeedOutcome>> {
    let outcome = service.seed_products().await?;
    Ok(Json(outcome))
}

/// JSON Schema for the Product model, keyed for tooling
pub async fn product_schema() -> Json<serde_json::Value> {
    let schema = schemars::schema_for!(CreateProduct);
    Json(serde_json::json!({ "product": schema }))
}
