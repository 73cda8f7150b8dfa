use axum::Json;
use serde::Serialize;

#[derive(Debug)]
#[derive(Serialize)]
pub struct DataResponse {
    message: String,
}

// TODO: call the real upstream data API here once it exists, instead of
// returning the canned payload.
#[tracing::instrument(name = "Serving the placeholder data payload")]
pub async fn get_data() -> Json<DataResponse> {
    Json(DataResponse {
        message: "Hello from Python!".into(),
    })
}
