use cartographer_seed::{config::Config, error::Error, seed::SeedPipeline, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Seed failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let summary = SeedPipeline::new(&db, &config.data_dir).run().await?;
    summary.log();

    Ok(())
}
