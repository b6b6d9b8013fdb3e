//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::api::LatestDataSource;
use crate::logging::init_headless_logger;
use crate::ui::UIConfig;
use crate::ui::dashboard::components::data_card::{DataCard, NUTRIENT_TITLE, SENSOR_TITLE};
use crate::ui::dashboard::{ApplyResult, DashboardState};
use std::error::Error;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Printing both cards whenever the displayed values change
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - Headless mode completed successfully
/// * `Err` - Headless mode failed
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    init_headless_logger();
    let environment = session.client.environment().clone();
    print_session_starting("headless", &environment.api_url());

    let mut state = DashboardState::new(environment, UIConfig::default());
    let shutdown = shutdown_on(tokio::signal::ctrl_c());
    drive(&mut state, session.client, shutdown, &mut std::io::stdout()).await?;

    print_session_shutdown();
    print_session_exit_success();

    Ok(())
}

/// Resolves when `signal` fires. If the handler could not be installed the
/// session keeps running until the process is killed.
async fn shutdown_on(signal: impl Future<Output = std::io::Result<()>>) {
    if signal.await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Mount the dashboard, print every change until `shutdown` resolves, then unmount.
pub(crate) async fn drive<W: Write>(
    state: &mut DashboardState,
    source: Arc<dyn LatestDataSource>,
    shutdown: impl Future<Output = ()>,
    out: &mut W,
) -> std::io::Result<()> {
    state.mount(source);
    log_latest_event(state);

    tokio::pin!(shutdown);
    while state.is_mounted() {
        tokio::select! {
            _ = &mut shutdown => break,
            outcome = state.next_outcome() => {
                let Some(outcome) = outcome else { break };
                let result = state.apply_outcome(outcome);
                log_latest_event(state);
                if result == ApplyResult::Updated {
                    write_cards(state, out)?;
                }
            }
        }
    }

    state.unmount();
    log_latest_event(state);
    Ok(())
}

fn log_latest_event(state: &DashboardState) {
    if let Some(event) = state.activity_logs.back() {
        event.log();
    }
}

/// Print both cards in the same line format the TUI uses.
fn write_cards<W: Write>(state: &DashboardState, out: &mut W) -> std::io::Result<()> {
    if let Some(sensor) = state.sensor() {
        writeln!(out, "{}", SENSOR_TITLE)?;
        for line in DataCard::Verbatim(sensor).lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    if let Some(nutrients) = state.nutrients() {
        writeln!(out, "{}", NUTRIENT_TITLE)?;
        for line in DataCard::Numeric(nutrients).lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockLatestDataSource;
    use crate::api::error::ApiError;
    use crate::environment::Environment;
    use crate::snapshot::LatestData;
    use std::time::Duration;

    fn payload() -> LatestData {
        LatestData::from_value(
            serde_json::from_str(r#"{"sensor":{"temp":"22C"},"nutrients":{"N":12.345}}"#)
                .unwrap(),
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_prints_cards_once_per_change() {
        let mut mock = MockLatestDataSource::new();
        mock.expect_latest_data().returning(|| Ok(payload()));

        let mut state = DashboardState::new(Environment::Local, UIConfig::default());
        let mut out = Vec::new();
        // Three ticks return identical data; only the first changes the view.
        let shutdown = tokio::time::sleep(Duration::from_millis(10_500));
        drive(&mut state, Arc::new(mock), shutdown, &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            format!(
                "{}\n  temp: 22C\n{}\n  N: 12.35\n",
                SENSOR_TITLE, NUTRIENT_TITLE
            )
        );
        assert!(!state.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signal_error_does_not_end_session() {
        let failed = shutdown_on(async { Err(std::io::Error::other("no signal handler")) });
        assert!(
            tokio::time::timeout(Duration::from_secs(60), failed)
                .await
                .is_err()
        );

        let fired = shutdown_on(async { Ok(()) });
        assert!(
            tokio::time::timeout(Duration::from_secs(60), fired)
                .await
                .is_ok()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_keeps_printing_while_signal_handler_is_unavailable() {
        let mut mock = MockLatestDataSource::new();
        mock.expect_latest_data().returning(|| Ok(payload()));

        let mut state = DashboardState::new(Environment::Local, UIConfig::default());
        let mut out = Vec::new();
        let shutdown = shutdown_on(async { Err(std::io::Error::other("no signal handler")) });
        let run = drive(&mut state, Arc::new(mock), shutdown, &mut out);

        // The session outlives a failed handler install; only the timeout ends it.
        assert!(
            tokio::time::timeout(Duration::from_secs(12), run)
                .await
                .is_err()
        );
        assert!(String::from_utf8(out).unwrap().contains("temp: 22C"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_print_nothing() {
        let mut mock = MockLatestDataSource::new();
        mock.expect_latest_data().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let mut state = DashboardState::new(Environment::Local, UIConfig::default());
        let mut out = Vec::new();
        let shutdown = tokio::time::sleep(Duration::from_millis(5_500));
        drive(&mut state, Arc::new(mock), shutdown, &mut out)
            .await
            .unwrap();

        assert!(out.is_empty());
        assert!(state.sensor().is_none());
        assert!(state.last_failure().is_some());
    }
}
