//! Countdown ticker
//!
//! Background task that refreshes countdown text and urgency of the current
//! board at a fixed interval. Each tick recomputes from the clock, so a
//! missed or delayed tick leaves nothing to catch up on.

use crate::engine::Board;
use crate::services::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodic board refresher. Clones share the same board.
#[derive(Clone)]
pub struct CountdownTicker {
    board: Arc<RwLock<Board>>,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl CountdownTicker {
    pub fn new(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            board: Arc::new(RwLock::new(Board::default())),
            clock,
            interval,
        }
    }

    /// Shared handle to the displayed board
    pub fn board(&self) -> Arc<RwLock<Board>> {
        Arc::clone(&self.board)
    }

    /// Replace the displayed board after the projection was re-run
    pub async fn set_board(&self, board: Board) {
        let mut current = self.board.write().await;
        *current = board;
    }

    /// Refresh the board as of the clock's current instant
    pub async fn tick(&self) {
        let now = self.clock.now();
        let mut board = self.board.write().await;
        board.refresh(now);
    }

    /// Start the background refresh loop.
    ///
    /// `on_tick` sees the board right after each refresh.
    pub fn start<F>(&self, on_tick: F) -> TickerHandle
    where
        F: Fn(&Board) + Send + Sync + 'static,
    {
        let ticker = self.clone();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            tracing::info!("Starting countdown ticker (interval: {:?})", ticker.interval);

            let mut interval = tokio::time::interval(ticker.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = interval.tick() => {
                        ticker.tick().await;
                        let board = ticker.board.read().await;
                        on_tick(&*board);
                    }
                }
            }

            tracing::info!("Countdown ticker stopped");
        });

        TickerHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }
}

/// Running ticker; stop it at teardown. Dropping the handle also ends the loop.
pub struct TickerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Signal the loop to exit and wait for it
    pub async fn stop(self) {
        let TickerHandle { shutdown, task } = self;

        if let Some(shutdown) = shutdown {
            // The loop may already be gone; nothing to signal then
            let _ = shutdown.send(());
        }

        if let Err(e) = task.await {
            tracing::error!("Countdown ticker ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PASSED_TEXT;
    use crate::engine::BoardQuery;
    use crate::models::{ExamRecord, Urgency};
    use crate::services::FixedClock;
    use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn start_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn board_with_exam_in(offset: ChronoDuration) -> Board {
        let record = ExamRecord {
            id: "exam-1".to_string(),
            course: "Statistics".to_string(),
            exam_type: "Final".to_string(),
            datetime: (start_instant() + offset).to_rfc3339(),
            seat: String::new(),
            building: String::new(),
            room: String::new(),
            notes: String::new(),
            created_at: String::new(),
        };
        Board::build(vec![record], &BoardQuery::default(), start_instant())
    }

    #[tokio::test]
    async fn test_tick_recomputes_from_clock() {
        let clock = FixedClock::new(start_instant());
        let ticker = CountdownTicker::new(Arc::new(clock.clone()), Duration::from_secs(1));
        ticker.set_board(board_with_exam_in(ChronoDuration::hours(3))).await;

        clock.advance(ChronoDuration::minutes(61));
        ticker.tick().await;

        let board = ticker.board();
        let board = board.read().await;
        assert_eq!(board.entries()[0].countdown, "1h 59m 0s");
        assert_eq!(board.entries()[0].urgency, Urgency::Critical);
    }

    #[tokio::test]
    async fn test_skipped_ticks_leave_no_drift() {
        let clock = FixedClock::new(start_instant());
        let ticker = CountdownTicker::new(Arc::new(clock.clone()), Duration::from_secs(1));
        ticker.set_board(board_with_exam_in(ChronoDuration::minutes(10))).await;

        clock.advance(ChronoDuration::minutes(11));
        ticker.tick().await;

        let board = ticker.board();
        assert_eq!(board.read().await.entries()[0].countdown, PASSED_TEXT);
    }

    #[tokio::test]
    async fn test_background_loop_runs_until_stopped() {
        let clock = FixedClock::new(start_instant());
        let ticker = CountdownTicker::new(Arc::new(clock.clone()), Duration::from_millis(20));
        ticker.set_board(board_with_exam_in(ChronoDuration::days(2))).await;

        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let handle = ticker.start(move |board| {
            assert_eq!(board.len(), 1);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        clock.advance(ChronoDuration::days(1));
        tokio::time::sleep(Duration::from_millis(150)).await;
        handle.stop().await;

        let seen = ticks.load(Ordering::SeqCst);
        assert!(seen >= 2, "expected at least two ticks, saw {}", seen);

        let board = ticker.board();
        assert_eq!(board.read().await.entries()[0].countdown, "1d 0h 0m");

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
