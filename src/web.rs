use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::api;
use crate::bot::WeatherBot;

pub async fn run(port: u16, bot: Arc<WeatherBot>) {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(bot))
        .layer(RequestBodyLimitLayer::new(16 * 1024))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Chat server running at http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}
