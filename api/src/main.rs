use api::{build_router, AppState, Config};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Loaded {:?}", config);

    let app = build_router(AppState::from_config(&config));

    if let Err(e) = serve(app, &config).await {
        log::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

async fn serve(app: axum::Router, config: &Config) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    log::info!("Server running on http://localhost:{}", listener.local_addr()?.port());
    log::info!("CORS enabled for all origins");
    axum::serve(listener, app).await?;
    Ok(())
}
