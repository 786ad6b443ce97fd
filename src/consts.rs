pub mod cli_consts {
    //! Login Screen Constants
    //!
    //! Tunables for the login flow, grouped by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity panel.
    pub const MAX_ACTIVITY_LOGS: usize = 50;

    /// Buffer size of the event channel between the view-model and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size of the navigation channel.
    pub const ROUTE_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // VALIDATION
    // =============================================================================

    /// Minimum number of characters accepted for a password.
    pub const MIN_PASSWORD_LEN: usize = 6;

    // =============================================================================
    // SIMULATED AUTHENTICATION
    // =============================================================================

    /// Simulated authentication round trip
    pub mod simulated_auth {
        use std::time::Duration;

        /// Delay standing in for a network round trip (milliseconds)
        pub const DEFAULT_DELAY_MS: u64 = 1500;

        /// Helper function to get the default simulated delay
        pub const fn default_delay() -> Duration {
            Duration::from_millis(DEFAULT_DELAY_MS)
        }
    }

    // =============================================================================
    // USER-FACING MESSAGES
    // =============================================================================

    /// Message stored in the session state when credentials are rejected.
    pub const REJECTED_MESSAGE: &str = "Invalid username or password";

    // =============================================================================
    // UI TIMING
    // =============================================================================

    /// How long the splash screen stays up before the form appears (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2000;

    /// Key event polling interval of the UI loop (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}
