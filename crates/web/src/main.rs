use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::standings::handlers::get_full_standings,
        features::standings::handlers::get_standings_summary,
        features::standings::handlers::get_competition_leaderboard,
    ),
    components(
        schemas(
            storage::dto::standings::FullStandings,
            storage::dto::standings::PointTemplateInfo,
            storage::dto::standings::PlayerStanding,
            storage::dto::standings::CompetitionResult,
            storage::dto::standings::PlayerStandingSummary,
            storage::dto::standings::CompetitionLeaderboard,
            storage::dto::standings::LeaderboardEntry,
            storage::models::Tour,
        )
    ),
    tags(
        (name = "standings", description = "Tour standings and competition leaderboards"),
    )
)]
struct ApiDoc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,storage=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Host part of a connection string, without credentials.
fn database_host(database_url: &str) -> &str {
    database_url.rsplit('@').next().unwrap_or(database_url)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Failed to load standings API configuration")?;

    let db = Database::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", database_host(&config.database_url)))?;
    db.run_migrations()
        .await
        .context("Failed to apply tour schema migrations")?;
    tracing::info!(
        database = database_host(&config.database_url),
        "Tour database ready"
    );

    let app = routes::router(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!(address = %bind_address, "Serving tour standings (docs at /swagger-ui/)");

    axum::serve(listener, app).await?;

    Ok(())
}
