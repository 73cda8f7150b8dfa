use axum::http;

#[tracing::instrument(name = "Sending health check result")]
pub async fn health_check() -> http::StatusCode {
    http::StatusCode::OK
}
