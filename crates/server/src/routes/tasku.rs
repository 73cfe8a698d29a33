use axum::http::StatusCode;

/// Fixed body returned by `GET /taskus`
pub const TASKU_STATUS: &str = "Tasku API está funcionando";

/// Reports that the Tasku API is up
#[utoipa::path(
    get,
    path = "/taskus",
    responses(
        (status = 200, description = "Tasku API is running", content_type = "text/plain", body = String)
    ),
    tag = "Tasku"
)]
pub async fn tasku() -> (StatusCode, &'static str) {
    (StatusCode::OK, TASKU_STATUS)
}
