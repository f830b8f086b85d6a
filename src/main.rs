use std::net::{IpAddr, SocketAddr};

use rocketshoes::{config, routes, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let settings = config::load();

    let ip = settings
        .host
        .parse::<IpAddr>()
        .map_err(|e| format!("invalid HOST {}: {e}", settings.host))?;
    let addr = SocketAddr::from((ip, settings.port));

    tracing::info!("catalog api at {}", settings.api_url);
    let state = AppState::build(settings).await?;
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| e.to_string())
}
