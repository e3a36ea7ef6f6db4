use roster::{config::Config, error::Error, seeder::DatabaseSeeder, startup};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;

    let user_count = DatabaseSeeder::new(&db).run(config.seed_users).await?;

    info!("users table holds {} rows", user_count);

    Ok(())
}
