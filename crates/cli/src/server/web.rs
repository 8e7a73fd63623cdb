use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use zipcast_api::{create_api_routes, AppState};
use zipcast_domain::Config;

pub async fn start_web_server(config: &Config, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state, config);

    let addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Web server ready at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Creates the main application router
fn create_app(state: AppState, config: &Config) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state))
        .route("/", get(index_handler))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.server.cors_allowed_origins))
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../../../web/static/index.html"))
}

fn build_cors(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(parsed))
}
