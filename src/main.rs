use inventory_catalog::{
    create_router,
    infrastructure::{config::load_config, logger::init_logging},
    DatabaseManager, ProductService,
};
use std::{env, path::PathBuf};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 用法: inventory_server [config.toml]
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    let _guard = init_logging(&config.logging)?;
    info!("Starting inventory catalog server...");

    let db = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Error opening database: {}", e);
            e
        })?;
    db.init_schema().await?;

    let app = create_router(ProductService::new(db.pool().clone()), &config.http);

    let listener = TcpListener::bind(config.http.socket_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Server running on http://{}", addr);
    info!("   GET    /api/products      - List products");
    info!("   POST   /api/products      - Create product");
    info!("   DELETE /api/products/:id  - Delete product");
    info!("   GET    /health            - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, releasing database");
    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl+c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
