/*
 * Responsibility
 * - Tracing + panic-hook init, config load, pool/state construction
 * - Router assembly and middleware application (bearer, security
 *   headers, CORS, transport)
 * - axum::serve() startup
 */
use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use std::{panic, process, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    services::{auth::TokenVerifier, id_codec::IdCodec},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,customer_service=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr
        // is hidden by the launcher.
        tracing::error!(?info, "panic");

        // Development: fail fast. Production: default behavior, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting customer-service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let db = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&db).await?;

    let state = build_state(db, &config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the shared state from an already-connected (or lazy) pool.
///
/// Public so integration tests can assemble the real state without
/// going through `run()`.
pub fn build_state(db: sqlx::PgPool, config: &Config) -> Result<AppState> {
    let id_codec = IdCodec::new(config.sqids_min_length, &config.sqids_alphabet)?;
    let verifier = Arc::new(TokenVerifier::new(
        config.auth_jwt_secret.as_bytes(),
        &config.auth_issuer,
        config.access_token_leeway_seconds,
    ));

    Ok(AppState::new(
        db,
        id_codec,
        verifier,
        config.forwarded_user_header.clone(),
    ))
}

/// Assemble the full middleware/router stack. Also the entry-point the
/// integration tests drive with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let v1 = api::v1::routes::routes();
    let v1 = middleware::auth::bearer::apply(v1, state.clone());

    let app = Router::new().nest("/api/v1", v1).with_state(state);

    // Outermost last: security headers, then CORS, then transport infra
    let app = middleware::security_headers::apply(app);
    let app = middleware::cors::apply(app, config);
    middleware::http::apply(app)
}
