//! Main application state and UI loop
//!
//! Contains the App struct, the route table, and main UI event handling logic

use crate::api::LatestDataSource;
use crate::consts::cli_consts::ui::{INPUT_POLL_INTERVAL, SPLASH_DURATION};
use crate::environment::Environment;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Copy, Default)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Client-side routes. Every route is reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The dashboard view, served at the root path.
    Dashboard,
}

impl Route {
    pub const ALL: &'static [Route] = &[Route::Dashboard];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
        }
    }

    /// Resolve a path; unknown paths have no view.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|route| route.path() == path)
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The view for the active route.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// Where the dashboard fetches its data from.
    source: Arc<dyn LatestDataSource>,

    /// The sensor service the dashboard is pointed at.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        source: Arc<dyn LatestDataSource>,
        environment: Environment,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            source,
            environment,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Mount the view served at `path`. Unknown paths leave the current screen.
    fn navigate(&mut self, path: &str) {
        if let Some(Route::Dashboard) = Route::from_path(path) {
            let mut state = DashboardState::new(self.environment.clone(), self.ui_config);
            state.mount(self.source.clone());
            self.current_screen = Screen::Dashboard(Box::new(state));
        }
    }

    /// Unmount whatever view is active.
    fn shutdown(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.unmount();
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // UI event loop
    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= SPLASH_DURATION {
                app.navigate(Route::Dashboard.path());
                continue;
            }
        }

        // Keep the runtime free for the refresh task between frames
        tokio::task::yield_now().await;

        // Poll for key events
        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.shutdown();
                    return Ok(());
                }

                // Any other key skips the splash screen
                if let Screen::Splash = app.current_screen {
                    app.navigate(Route::Dashboard.path());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_resolves_to_dashboard() {
        assert_eq!(Route::from_path("/"), Some(Route::Dashboard));
        assert_eq!(Route::Dashboard.path(), "/");
        assert_eq!(Route::Dashboard.title(), "Dashboard");
    }

    #[test]
    fn test_unknown_path_has_no_view() {
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path(""), None);
    }

    struct NeverCalled;

    #[async_trait::async_trait]
    impl LatestDataSource for NeverCalled {
        async fn latest_data(
            &self,
        ) -> Result<crate::snapshot::LatestData, crate::api::error::ApiError> {
            std::future::pending().await
        }
    }

    fn app() -> App {
        App::new(Arc::new(NeverCalled), Environment::Local, UIConfig::default())
    }

    #[tokio::test]
    async fn test_navigate_mounts_dashboard_for_root_path() {
        let mut app = app();
        app.navigate(Route::Dashboard.path());
        match &app.current_screen {
            Screen::Dashboard(state) => assert!(state.is_mounted()),
            Screen::Splash => panic!("expected the dashboard screen"),
        }
        app.shutdown();
        match &app.current_screen {
            Screen::Dashboard(state) => assert!(!state.is_mounted()),
            Screen::Splash => panic!("expected the dashboard screen"),
        }
    }

    #[tokio::test]
    async fn test_navigate_to_unknown_path_keeps_current_screen() {
        let mut app = app();
        app.navigate("/history");
        assert!(matches!(app.current_screen, Screen::Splash));
    }

    #[test]
    fn test_every_route_has_a_unique_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }
}
