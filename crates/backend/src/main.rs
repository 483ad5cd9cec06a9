use backend::routes::{configure_routes, AppState};
use backend::shared::config::{load_config, static_dir};
use backend::shared::logger::init_tracing;
use backend::shared::upstream::HttpUpstream;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    init_tracing(&log_dir)?;

    let config = load_config()?;
    tracing::info!("Upstream: {}", config.upstream.url);

    let upstream = HttpUpstream::new(&config.upstream)?;
    let app = configure_routes(AppState::new(upstream), &static_dir(&config));

    let addr = config.bind_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
