use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{api::router::ApiRoutes, app_state::SharedAppState};

pub async fn setup_http_server(
    app_state: SharedAppState,
    bind_address: &str,
) -> anyhow::Result<tokio::task::JoinHandle<anyhow::Result<()>>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let app = ApiRoutes::create(app_state.clone())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("API server listening on {}", bind_address);

    let stop_flag = app_state.stop_flag.clone();
    let handle = tokio::spawn(async move {
        info!("Starting HTTP server");
        axum::serve(listener, app)
            .with_graceful_shutdown({
                let stop_flag = stop_flag.clone();
                async move {
                    stop_flag.wait().await;
                    info!("Stop flag was set, shutting down HTTP server gracefully");
                }
            })
            .await?;
        info!("HTTP server is down");
        Ok(())
    });

    Ok(handle)
}
