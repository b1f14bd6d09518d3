use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vantage::config::Config;
use vantage::engine::VoteWeights;
use vantage::services::{ChartStore, NewsStore, RefreshScheduler, SignalStore};
use vantage::sources::{KlineClient, NewsClient, PredictionClient};
use vantage::{api, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vantage=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Vantage server on {}:{}", config.host, config.port);

    // Shared stores
    let charts = ChartStore::new();
    let signals = SignalStore::new(VoteWeights::default());
    let news = NewsStore::new();

    // Start the per-timeframe refresh loops
    let scheduler = RefreshScheduler::new(
        KlineClient::new(config.market_api_url.clone()),
        charts.clone(),
        signals.clone(),
        config.pairs.clone(),
        config.kline_limit,
    );
    scheduler.spawn();

    // Start the news feed poller (optional)
    if let Some(ref feed_url) = config.news_feed_url {
        info!("News feed configured, starting poller");
        let news_client = NewsClient::new(feed_url.clone(), news.clone());
        tokio::spawn(news_client.start_polling());
    }

    // Prediction service proxy (optional)
    let predictions = config.prediction_api_url.as_ref().map(|url| {
        info!("Prediction service configured at {}", url);
        Arc::new(PredictionClient::new(url.clone()))
    });

    // Create application state
    let state = AppState {
        config: config.clone(),
        charts,
        signals,
        news,
        predictions,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = api::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Vantage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
