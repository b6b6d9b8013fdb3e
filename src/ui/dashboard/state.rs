//! Dashboard state management
//!
//! Holds the latest snapshots and owns the refresh timer for as long as the view is mounted.

use crate::api::LatestDataSource;
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, refresh::refresh_interval};
use crate::environment::Environment;
use crate::events::Event;
use crate::snapshot::{NutrientSnapshot, SensorSnapshot};
use crate::ui::app::UIConfig;
use crate::workers::{FetchOutcome, PollerHandle, spawn_poller};

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// A mounted view's refresh timer and the channel its outcomes arrive on.
#[derive(Debug)]
pub(super) struct Subscription {
    pub(super) poller: PollerHandle,
    pub(super) outcomes: mpsc::Receiver<FetchOutcome>,
}

/// What applying one fetch outcome did to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Both snapshots were replaced and the displayed values changed.
    Updated,
    /// Both snapshots were replaced with identical values.
    Unchanged,
    /// A newer response was already applied; this one was dropped.
    Stale,
    /// The fetch failed; previous snapshots stay on screen.
    Failed,
    /// The view is unmounted; nothing was touched.
    Discarded,
}

/// Dashboard view state.
#[derive(Debug)]
pub struct DashboardState {
    /// The sensor service being polled.
    pub environment: Environment,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,

    sensor: Option<SensorSnapshot>,
    nutrients: Option<NutrientSnapshot>,
    /// Sequence of the response currently on screen.
    pub(super) last_applied_seq: Option<u64>,
    /// Local time the displayed values last changed.
    pub(super) last_update: Option<String>,
    /// Set when the newest completed tick failed; cleared by the next applied response.
    pub(super) last_failure: Option<String>,
    pub(super) subscription: Option<Subscription>,
    /// Set once the view has been unmounted; a torn-down view never changes again.
    pub(super) torn_down: bool,
}

impl DashboardState {
    /// Creates an unmounted dashboard with both halves in the loading state.
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            with_background_color: ui_config.with_background_color,
            activity_logs: VecDeque::new(),
            sensor: None,
            nutrients: None,
            last_applied_seq: None,
            last_update: None,
            last_failure: None,
            subscription: None,
            torn_down: false,
        }
    }

    /// Start refreshing from `source`: one fetch now, then one every refresh interval.
    pub fn mount(&mut self, source: Arc<dyn LatestDataSource>) {
        self.mount_with_interval(source, refresh_interval());
    }

    pub fn mount_with_interval(&mut self, source: Arc<dyn LatestDataSource>, interval: Duration) {
        if self.subscription.is_some() || self.torn_down {
            return;
        }
        let (poller, outcomes) = spawn_poller(source, interval);
        self.subscription = Some(Subscription { poller, outcomes });
        self.add_to_activity_log(Event::dashboard(format!(
            "Refreshing every {}s from {}",
            interval.as_secs(),
            self.environment.api_url()
        )));
    }

    /// Stop the refresh timer and refuse any outcome still on its way.
    pub fn unmount(&mut self) {
        self.torn_down = true;
        if let Some(mut subscription) = self.subscription.take() {
            subscription.poller.stop();
            subscription.outcomes.close();
            self.add_to_activity_log(Event::dashboard("Dashboard stopped".to_string()));
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(|subscription| subscription.poller.is_running())
    }

    pub fn sensor(&self) -> Option<&SensorSnapshot> {
        self.sensor.as_ref()
    }

    pub fn nutrients(&self) -> Option<&NutrientSnapshot> {
        self.nutrients.as_ref()
    }

    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Data is on screen but the newest completed tick failed.
    pub fn is_stale(&self) -> bool {
        self.sensor.is_some() && self.last_failure.is_some()
    }

    /// Replace both snapshots together.
    pub(super) fn replace_snapshots(&mut self, sensor: SensorSnapshot, nutrients: NutrientSnapshot) {
        self.sensor = Some(sensor);
        self.nutrients = Some(nutrients);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        self.unmount();
    }
}
