use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::database::{DatabaseConfig, init_pool};
use tokio::net::TcpListener;

use api::{
    repositories::{
        BadWordRepository, UserRepository, downvote::DownvoteRepository, media::MediaRepository,
        post::PostRepository,
    },
    routes,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    info!("API service initialized successfully");

    // Initialize repositories
    let user_repository = UserRepository::new(pool.clone());
    let post_repository = PostRepository::new(pool.clone());
    let media_repository = MediaRepository::new(pool.clone());
    let downvote_repository = DownvoteRepository::new(pool.clone());
    let bad_word_repository = BadWordRepository::new(pool.clone());

    let app_state = AppState {
        db_pool: pool,
        user_repository,
        post_repository,
        media_repository,
        downvote_repository,
        bad_word_repository,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("API service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
