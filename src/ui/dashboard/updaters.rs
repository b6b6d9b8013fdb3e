//! Dashboard state update logic
//!
//! Every fetch outcome passes through `apply_outcome`, the view's single write path.

use super::state::{ApplyResult, DashboardState};

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::workers::FetchOutcome;
use chrono::Local;

impl DashboardState {
    /// Apply every outcome that has arrived since the last frame.
    pub fn update(&mut self) {
        while let Some(outcome) = self.try_next_outcome() {
            self.apply_outcome(outcome);
        }
    }

    fn try_next_outcome(&mut self) -> Option<FetchOutcome> {
        self.subscription.as_mut()?.outcomes.try_recv().ok()
    }

    /// Wait for the next outcome. Returns `None` once the view is unmounted.
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        match self.subscription.as_mut() {
            Some(subscription) => subscription.outcomes.recv().await,
            None => None,
        }
    }

    /// Apply one tick's outcome.
    ///
    /// A successful response replaces both snapshots together, unless a response
    /// with a higher sequence number is already on screen. A failure leaves the
    /// snapshots untouched.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> ApplyResult {
        if self.torn_down {
            return ApplyResult::Discarded;
        }

        let FetchOutcome { seq, result } = outcome;
        match result {
            Ok(data) => {
                if let Some(applied) = self.last_applied_seq {
                    if seq <= applied {
                        self.add_to_activity_log(Event::refresh_with_level(
                            format!(
                                "Dropped out-of-order response #{} (showing #{})",
                                seq, applied
                            ),
                            EventType::Refresh,
                            LogLevel::Debug,
                        ));
                        return ApplyResult::Stale;
                    }
                }

                let changed = self.sensor() != Some(&data.sensor)
                    || self.nutrients() != Some(&data.nutrients);
                let summary = format!(
                    "Refreshed: {} sensor readings, {} nutrient predictions",
                    data.sensor.len(),
                    data.nutrients.len()
                );

                self.replace_snapshots(data.sensor, data.nutrients);
                self.last_applied_seq = Some(seq);
                self.last_failure = None;

                if changed {
                    self.last_update = Some(Local::now().format("%H:%M:%S").to_string());
                    self.add_to_activity_log(Event::refresh_with_level(
                        summary,
                        EventType::Success,
                        LogLevel::Info,
                    ));
                    ApplyResult::Updated
                } else {
                    self.add_to_activity_log(Event::refresh_with_level(
                        "No change in latest data".to_string(),
                        EventType::Refresh,
                        LogLevel::Debug,
                    ));
                    ApplyResult::Unchanged
                }
            }
            Err(e) => {
                let log_level = ErrorClassifier::new().classify_fetch_error(&e);
                // A failure older than what is on screen says nothing about freshness.
                if self.last_applied_seq.is_none_or(|applied| seq > applied) {
                    self.last_failure = Some(e.to_string());
                }
                self.add_to_activity_log(Event::refresh_with_level(
                    format!("Refresh failed: {}", e),
                    EventType::Error,
                    log_level,
                ));
                ApplyResult::Failed
            }
        }
    }
}
