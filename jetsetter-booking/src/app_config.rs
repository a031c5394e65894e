use serde::Deserialize;
use std::env;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub workflow: WorkflowConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkflowConfig {
    /// 0 disables the timeout
    #[serde(default = "default_submit_timeout_secs")]
    pub submit_timeout_secs: u64,
}

fn default_submit_timeout_secs() -> u64 { 60 }

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submit_timeout_secs: default_submit_timeout_secs(),
        }
    }
}

impl WorkflowConfig {
    pub fn submit_timeout(&self) -> Option<Duration> {
        (self.submit_timeout_secs > 0).then(|| Duration::from_secs(self.submit_timeout_secs))
    }
}

/// In-process stand-in for the booking provider
#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    #[serde(default)]
    pub latency_ms: u64,
    /// When set every booking is rejected with this message
    #[serde(default)]
    pub reject_with: Option<String>,
    #[serde(default = "default_pnr_prefix")]
    pub pnr_prefix: String,
}

fn default_pnr_prefix() -> String { "JS".to_string() }

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            reject_with: None,
            pnr_prefix: default_pnr_prefix(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered: `default`, then `RUN_MODE` (development when unset), then
    /// `local`, then `JETSETTER__SECTION__KEY` environment variables. Every
    /// file is optional.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            .add_source(config::File::from(dir.join("local")).required(false))
            .add_source(
                config::Environment::with_prefix("JETSETTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
