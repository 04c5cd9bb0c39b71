use embr_app::{config::AppConfig, db::connection, logging::init_tracing, seed};

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
        tracing::error!("seed failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connection::connect(&cfg.database).await?;
    let report = seed::run(&db).await?;
    db.close().await?;
    tracing::info!(
        users = report.users_inserted,
        todos = report.todos_inserted,
        posts = ?report.posts_inserted,
        "seed complete"
    );
    Ok(())
}
