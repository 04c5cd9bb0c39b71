use std::net::SocketAddr;

use embr_app::{
    config::AppConfig, db::connection, logging::init_tracing, routes::app, state::AppState,
};

#[tokio::main]
async fn main() {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("failed to load config: {err:?}");
            std::process::exit(1);
        }
    };
    init_tracing(&cfg.log_level);

    if let Err(err) = run(cfg).await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connection::connect(&cfg.database).await?;
    let state = AppState::new(cfg, db);

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;
    tracing::info!("listening on http://{}", addr);
    tracing::info!("DATABASE_URL: {}", state.config.database_url_label());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
