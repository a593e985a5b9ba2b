/*
 * Responsibility
 * - v1 URL table
 * - /health, /customers/me, /vehicles, /history
 * - The bearer middleware is applied over this whole router in app.rs;
 *   per-route identity rules live in the extractors, not here
 */
use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    customers::{me, update_me},
    health::health,
    history::{add_history, list_history},
    vehicles::{create_vehicle, delete_vehicle, list_vehicles, update_vehicle},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/customers/me", get(me).put(update_me))
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route(
            "/vehicles/{vehicle_id}",
            put(update_vehicle).delete(delete_vehicle),
        )
        .route("/history", get(list_history).post(add_history))
}
