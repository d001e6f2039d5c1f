mod config;
mod contact;
mod errors;
mod page;
mod pursuits;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::contact::mailer::SmtpMailer;
use crate::contact::rate_limit::RateLimiter;
use crate::pursuits::seed::seed_pursuits;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only malformed values are fatal
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV site v{}", env!("CARGO_PKG_VERSION"));

    match config.mail.resolve() {
        Some(mail) => info!(
            "Contact form delivers via {}:{} ({})",
            mail.host,
            mail.port,
            if mail.implicit_tls() { "implicit TLS" } else { "STARTTLS when offered" }
        ),
        None => warn!(
            "Mail settings incomplete; contact submissions will be refused: {:?}",
            config.mail.presence()
        ),
    }

    let pursuits = seed_pursuits();
    info!("Loaded {} pursuits", pursuits.len());

    // Build app state
    let state = AppState {
        config: Arc::new(config.clone()),
        mailer: Arc::new(SmtpMailer),
        limiter: Arc::new(RateLimiter::new(config.rate_limit)),
        pursuits: pursuits.into(),
    };

    // Build router
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
