use serde::Deserialize;
use std::time::Duration;

/// Path that opens a private in-memory database instead of a file.
pub const IN_MEMORY: &str = ":memory:";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database file, or `:memory:`
    pub db_path: String,
    /// How long a statement waits on a locked database before failing
    #[serde(with = "millis")]
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Create a config for the database file at `db_path`
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path == IN_MEMORY
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: "users.db".to_string(),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
