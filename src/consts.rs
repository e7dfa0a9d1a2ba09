pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard
    //! client, organized by functional area.

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum event buffer size for worker channels.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Market data polling configuration.
    pub mod market {
        use std::time::Duration;

        /// Interval between market snapshot refreshes (milliseconds).
        /// The backend republishes index values on roughly this cadence.
        pub const REFRESH_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the refresh interval.
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    /// HTTP client configuration.
    pub mod http {
        use std::time::Duration;

        /// Connect timeout for backend requests (seconds).
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Overall request timeout for backend requests (seconds).
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the connect timeout.
        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        /// Helper function to get the request timeout.
        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
