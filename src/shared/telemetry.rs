//! 로깅 초기화
//! Logging initialisation (tracing + env-filter).

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// `RUST_LOG`이 없을 때 기본 필터
pub const DEFAULT_LOG_FILTER: &str = "jobtrack_api=info,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?
        .add_directive("hyper=warn".parse()?)
        .add_directive("sqlx=warn".parse()?);

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false);

    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
