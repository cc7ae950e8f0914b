use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

pub async fn list_orders() -> Json<Value> {
    Json(json!([
        { "id": 1, "status": "pending", "total": 18.5 },
        { "id": 2, "status": "delivered", "total": 42.0 }
    ]))
}

pub async fn list_dishes() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "Margherita", "price": 9.5 },
        { "id": 2, "name": "Pad Thai", "price": 12.0 }
    ]))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
