use crate::{
    doc::ApiDoc,
    routes::{root, tasku},
};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router with docs and response compression
pub fn router() -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/taskus", get(tasku::tasku))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
