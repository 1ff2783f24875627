use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use jobtrack_api::domains::auth::services::JwtService;
use jobtrack_api::routes::create_app;
use jobtrack_api::shared::config::AppConfig;
use jobtrack_api::shared::database::Database;
use jobtrack_api::shared::services::AppState;
use jobtrack_api::shared::telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = telemetry::init() {
        eprintln!("failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // 설정 로드 (JWT_SECRET 없으면 시작 실패)
    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "configuration loaded");

    // DB 연결 + 마이그레이션
    let db = Database::new(&config.database_url).await?;
    db.initialize().await?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(&db, JwtService::new(&config.jwt_secret));
    let app = create_app(app_state, config.cors_origins.clone());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
