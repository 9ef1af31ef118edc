use anyhow::Result;
use clap::Parser;
use skillmatch_core::settings::DEFAULT_LOW_CONFIDENCE_THRESHOLD;
use skillmatch_core::{Engine, Recommender, Settings};
use skillmatch_server::{build_app, load_roles};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    /// Role catalog (.json, .jsonl or a directory); built-in dataset when omitted
    #[arg(long)]
    catalog: Option<String>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8000)]
    port: u16,
    /// Calibrated percentage below which a match is flagged low confidence
    #[arg(long, default_value_t = DEFAULT_LOW_CONFIDENCE_THRESHOLD)]
    low_confidence_threshold: f64,
    /// Largest n-gram in the index (1 or 2)
    #[arg(long, default_value_t = 2)]
    ngram_max: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let settings = Settings::default()
        .with_low_confidence_threshold(args.low_confidence_threshold)
        .with_ngram_max(args.ngram_max);
    settings.validate()?;

    let recommender = Arc::new(Recommender::new(settings.clone()));
    let app = build_app(recommender.clone());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    let server = tokio::spawn(async move { axum::serve(listener, app).await });

    // Requests get 503 until the engine is installed
    let catalog = args.catalog.clone();
    let init = tokio::task::spawn_blocking(move || -> Result<()> {
        let roles = load_roles(catalog.as_deref())?;
        recommender.install(Engine::build(roles, settings)?);
        Ok(())
    });
    if let Err(e) = init.await? {
        tracing::error!(error = %e, "failed to build recommendation engine");
        return Err(e);
    }

    server.await??;
    Ok(())
}
