pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! All tunables for the poller and the UI live here, grouped by area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel between the poller and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Data endpoint polling configuration
    pub mod polling {
        use std::time::Duration;

        /// Path of the sensor data endpoint, relative to the base URL.
        pub const DATA_ENDPOINT: &str = "/data";

        /// Fixed delay between polls (milliseconds). Also the implicit retry interval.
        pub const POLL_INTERVAL_MS: u64 = 5_000;

        /// Connect and request timeout for a single poll (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }

        /// Helper function to get the request timeout
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    pub mod ui {
        use std::time::Duration;

        /// How long the UI loop waits for a key press before redrawing.
        pub const INPUT_POLL_MS: u64 = 100;

        /// Data older than this many poll intervals is shown as stale.
        pub const STALE_AFTER_INTERVALS: u32 = 3;

        pub const fn input_poll() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }
}
