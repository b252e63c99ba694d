use std::time::Duration;

/// Default end-to-end timeout for one outbound delivery.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default TCP/TLS connect timeout for one outbound delivery.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default cap on deliveries in flight within a single dispatch.
pub const DEFAULT_MAX_CONCURRENCY: usize = 32;

/// Dispatch engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Upper bound on a single delivery, from connect to the end of the response.
    pub timeout: Duration,
    /// Upper bound on establishing the connection.
    pub connect_timeout: Duration,
    /// Maximum deliveries in flight per dispatch. Always at least 1.
    pub max_concurrency: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl DispatchConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default |
    /// |---------------------------------|---------|
    /// | `DISPATCH_TIMEOUT_SECS`         | `10`    |
    /// | `DISPATCH_CONNECT_TIMEOUT_SECS` | `5`     |
    /// | `DISPATCH_MAX_CONCURRENCY`      | `32`    |
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("DISPATCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT.as_secs().to_string())
            .parse()
            .expect("DISPATCH_TIMEOUT_SECS must be a valid u64");

        let connect_timeout_secs: u64 = std::env::var("DISPATCH_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_CONNECT_TIMEOUT.as_secs().to_string())
            .parse()
            .expect("DISPATCH_CONNECT_TIMEOUT_SECS must be a valid u64");

        let max_concurrency: usize = std::env::var("DISPATCH_MAX_CONCURRENCY")
            .unwrap_or_else(|_| DEFAULT_MAX_CONCURRENCY.to_string())
            .parse()
            .expect("DISPATCH_MAX_CONCURRENCY must be a valid usize");

        Self::default()
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_connect_timeout(Duration::from_secs(connect_timeout_secs))
            .with_max_concurrency(max_concurrency)
    }

    /// Set the per-delivery timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the concurrency cap. Zero is raised to 1.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}
