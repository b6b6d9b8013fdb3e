pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Organized by functional area: queues, refresh cadence, HTTP, and UI timing.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying fetch outcomes to the dashboard view.
    /// A full channel only delays the refresh task, it never drops outcomes.
    pub const OUTCOME_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Periodic refresh of the latest readings
    pub mod refresh {
        use std::time::Duration;

        /// Period between two consecutive fetches (milliseconds).
        /// The first fetch is issued immediately when the view mounts.
        pub const REFRESH_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the refresh interval
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Path of the endpoint serving the latest sensor and nutrient payload.
        pub const LATEST_DATA_ENDPOINT: &str = "latest-data";

        /// Default API base URL for a locally running sensor service.
        pub const DEFAULT_API_URL: &str = "http://localhost:5000";

        /// Environment variable overriding the API base URL.
        pub const API_URL_ENV_VAR: &str = "HYDRO_API_URL";

        /// TCP connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the splash screen stays up before the dashboard mounts.
        pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

        /// Key event poll timeout; also bounds the redraw period.
        pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);
    }
}
