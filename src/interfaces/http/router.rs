//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ProductService, SeedService};
use crate::interfaces::http::common::FieldViolation;
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::products::{self, ProductsState};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::seed::{self, SeedState};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        seed::run_seed,
    ),
    components(
        schemas(
            FieldViolation,
            health::HealthResponse,
            health::ComponentHealth,
            products::ProductResponse,
            products::CreateProductRequest,
            products::UpdateProductRequest,
            products::GenderDto,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Products", description = "Product catalog: create, list, lookup by id/title/slug, update, delete"),
        (name = "Seed", description = "Wipe and repopulate the catalog with sample data"),
    ),
    info(
        title = "Shop Catalog API",
        version = "1.0.0",
        description = "REST API for the shop product catalog",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Everything the HTTP layer needs from the running service
pub struct ApiDependencies {
    pub products: Arc<ProductService>,
    pub seed: Arc<SeedService>,
    /// Pinged by `/health`; `None` when running without a database
    pub db: Option<DatabaseConnection>,
    pub prometheus: PrometheusHandle,
    /// Prefix for catalog routes, e.g. `/api`
    pub api_prefix: String,
}

/// Create the API router with all routes
pub fn create_api_router(deps: ApiDependencies) -> Router {
    let prefix = deps.api_prefix.trim_end_matches('/');

    let product_routes = Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/{id}",
            get(products::get_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(ProductsState {
            service: deps.products,
        });

    let seed_routes = Router::new()
        .route("/", get(seed::run_seed))
        .with_state(SeedState { service: deps.seed });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(HealthState {
            db: deps.db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(prometheus_metrics))
        .with_state(MetricsState {
            handle: deps.prometheus,
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest(&format!("{}/products", prefix), product_routes)
        .nest(&format!("{}/seed", prefix), seed_routes)
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::SEED_SUCCESS_MESSAGE;
    use crate::infrastructure::InMemoryProductRepository;

    fn app() -> Router {
        let products = Arc::new(ProductService::new(Arc::new(InMemoryProductRepository::new())));
        let seed = Arc::new(SeedService::new(products.clone()));
        create_api_router(ApiDependencies {
            products,
            seed,
            db: None,
            prometheus: PrometheusBuilder::new().build_recorder().handle(),
            api_prefix: "/api".to_string(),
        })
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&b).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    fn red_tee() -> Value {
        json!({"title": "Red Tee", "gender": "men", "sizes": ["S", "M"], "images": ["a.jpg"]})
    }

    #[tokio::test]
    async fn create_returns_201_with_normalized_slug() {
        let app = app();
        let (status, body) = call(&app, "POST", "/api/products", Some(red_tee())).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["slug"], "red_tee");
        assert_eq!(body["data"]["images"], json!(["a.jpg"]));
    }

    #[tokio::test]
    async fn create_rejects_bad_bodies_with_400() {
        let app = app();

        let (status, _) = call(
            &app,
            "POST",
            "/api/products",
            Some(json!({"title": "Cap", "gender": "men", "sizes": [], "color": "red"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = call(
            &app,
            "POST",
            "/api/products",
            Some(json!({"title": "Cap", "gender": "robots", "sizes": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = call(
            &app,
            "POST",
            "/api/products",
            Some(json!({"title": "", "gender": "men", "sizes": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["fields"][0]["field"], "title");
    }

    #[tokio::test]
    async fn duplicate_create_is_400() {
        let app = app();
        call(&app, "POST", "/api/products", Some(red_tee())).await;
        let (status, body) = call(&app, "POST", "/api/products", Some(red_tee())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn get_by_term_and_missing_term() {
        let app = app();
        let (_, created) = call(&app, "POST", "/api/products", Some(red_tee())).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        for term in [id.as_str(), "RED_TEE", "Red%20Tee"] {
            let (status, body) = call(&app, "GET", &format!("/api/products/{}", term), None).await;
            assert_eq!(status, StatusCode::OK, "term {term}");
            assert_eq!(body["data"]["id"], id.as_str());
        }

        let (status, _) = call(&app, "GET", "/api/products/blue_tee", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_honours_pagination() {
        let app = app();
        call(&app, "POST", "/api/products", Some(red_tee())).await;
        call(
            &app,
            "POST",
            "/api/products",
            Some(json!({"title": "Blue Tee", "gender": "women", "sizes": ["L"]})),
        )
        .await;

        let (status, body) = call(&app, "GET", "/api/products?limit=1&offset=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["title"], "Blue Tee");

        let (status, _) = call(&app, "GET", "/api/products?limit=0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = call(&app, "GET", "/api/products?offset=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        for query in ["limit=18446744073709551615", "offset=18446744073709551615"] {
            let (status, body) = call(&app, "GET", &format!("/api/products?{query}"), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn patch_and_delete_status_codes() {
        let app = app();
        let (_, created) = call(&app, "POST", "/api/products", Some(red_tee())).await;
        let id = created["data"]["id"].as_str().unwrap().to_string();
        let uri = format!("/api/products/{}", id);

        let (status, body) = call(
            &app,
            "PATCH",
            &uri,
            Some(json!({"title": "Red Tee v2", "images": ["b.jpg", "c.jpg"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["slug"], "red_tee");
        assert_eq!(body["data"]["images"], json!(["b.jpg", "c.jpg"]));

        let (_, body) = call(&app, "PATCH", &uri, Some(json!({"description": "cotton"}))).await;
        assert_eq!(body["data"]["description"], "cotton");
        let (_, body) = call(&app, "PATCH", &uri, Some(json!({"description": null}))).await;
        assert!(body["data"]["description"].is_null());

        let (status, _) = call(&app, "PATCH", "/api/products/red_tee", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let missing = format!("/api/products/{}", uuid::Uuid::new_v4());
        let (status, _) = call(&app, "PATCH", &missing, Some(json!({"stock": 1}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["title"], "Red Tee v2");

        let (status, _) = call(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, "DELETE", "/api/products/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn seed_endpoint_repopulates() {
        let app = app();
        let (status, body) = call(&app, "GET", "/api/seed", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], SEED_SUCCESS_MESSAGE);

        let (_, list) = call(&app, "GET", "/api/products?limit=100", None).await;
        assert!(!list["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ambient_endpoints_respond() {
        let app = app();
        let (status, body) = call(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, _) = call(&app, "GET", "/metrics", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, doc) = call(&app, "GET", "/api-doc/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/api/products/{term}"].is_object());
    }
}
