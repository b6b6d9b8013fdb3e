//! Periodic `/latest-data` refresh
//!
//! One tick fires immediately and then every refresh interval. Each tick runs its
//! fetch as its own task and stamps the outcome with a monotonically increasing
//! sequence number, so the consumer can drop responses that resolve out of order.

use crate::api::LatestDataSource;
use crate::api::error::ApiError;
use crate::consts::cli_consts::OUTCOME_QUEUE_SIZE;
use crate::snapshot::LatestData;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

/// Result of one tick's fetch.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Tick number, starting at 1.
    pub seq: u64,
    pub result: Result<LatestData, ApiError>,
}

/// Owns the refresh task. Dropping the handle stops the timer and aborts any
/// fetch still in flight.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown_sender: broadcast::Sender<()>,
    join_handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Stop ticking. Idempotent.
    pub fn stop(&mut self) {
        let _ = self.shutdown_sender.send(());
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.join_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start refreshing from `source` every `interval`. Must be called inside a tokio runtime.
pub fn spawn_poller(
    source: Arc<dyn LatestDataSource>,
    interval: Duration,
) -> (PollerHandle, mpsc::Receiver<FetchOutcome>) {
    let (outcome_sender, outcome_receiver) = mpsc::channel(OUTCOME_QUEUE_SIZE);
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

    let join_handle = tokio::spawn(poll_latest_data(
        source,
        outcome_sender,
        shutdown_receiver,
        interval,
    ));

    (
        PollerHandle {
            shutdown_sender,
            join_handle: Some(join_handle),
        },
        outcome_receiver,
    )
}

async fn poll_latest_data(
    source: Arc<dyn LatestDataSource>,
    outcome_sender: mpsc::Sender<FetchOutcome>,
    mut shutdown: broadcast::Receiver<()>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    // Stay on the wall-clock grid from mount instead of bursting after a stall.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut in_flight = JoinSet::new();
    let mut seq: u64 = 0;

    loop {
        tokio::select! {
            _ = shutdown.recv() => break,
            _ = ticker.tick() => {
                seq += 1;
                let tick = seq;
                let source = Arc::clone(&source);
                let sender = outcome_sender.clone();
                in_flight.spawn(async move {
                    let result = source.latest_data().await;
                    // Receiver gone means the view unmounted; nothing to deliver to.
                    let _ = sender.send(FetchOutcome { seq: tick, result }).await;
                });
            }
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }

    in_flight.abort_all();
}
