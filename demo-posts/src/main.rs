use axum::{Router, middleware::from_fn, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oauth2_session_axum::{AUTH_ROUTE_PREFIX, auth_router, load_auth};

mod handlers;
mod posts;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize the auth library, then the demo's own table
    oauth2_session_axum::init().await?;
    posts::create_table(&oauth2_session::data_store_pool()).await?;

    let app = Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/posts",
            get(handlers::list_posts).post(handlers::create_post),
        )
        .route(
            "/api/posts/{id}",
            get(handlers::post_by_id).delete(handlers::delete_post),
        )
        .nest(AUTH_ROUTE_PREFIX.as_str(), auth_router())
        .layer(from_fn(load_auth));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3001").await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
