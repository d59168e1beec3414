// examtrack - exam tracker with live countdowns
// Headless host: opens the on-device store and logs the board every tick

use examtrack::app::AppState;
use examtrack::config::AppConfig;
use examtrack::engine::{prefixed_countdown, BoardQuery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "examtrack=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting examtrack");

    let state = AppState::open(AppConfig::from_env()).await?;

    let theme = state.theme_service.load().await;
    tracing::info!("Theme: {}", theme.label());

    let board = state
        .exams_service
        .current_board(&BoardQuery::default())
        .await;
    if board.is_empty() {
        tracing::info!("No exams saved yet");
    }
    state.ticker.set_board(board).await;

    let handle = state.ticker.start(|board| {
        for entry in board.entries() {
            tracing::info!(
                urgency = entry.urgency.css_class(),
                "{} [{}] {} {}",
                entry.record.course,
                entry.record.exam_type,
                entry.schedule,
                prefixed_countdown(&entry.countdown)
            );
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    handle.stop().await;

    Ok(())
}
