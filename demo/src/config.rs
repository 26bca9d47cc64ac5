use std::path::PathBuf;

use vodca::References;

static LOG_DIR: &str = "LOG_DIR";
static LOG_FILE: &str = "LOG_FILE";
static RUST_LOG: &str = "RUST_LOG";

const DEFAULT_LOG_DIR: &str = "./logs/";
const DEFAULT_LOG_FILE: &str = "demo.log";
const DEFAULT_FILTER: &str = "demo=info,application=info,driver=info";

/// Settings read from the environment, or from a `.env` file next to the binary.
#[derive(Debug, Clone, References)]
pub struct DemoConfig {
    log_dir: PathBuf,
    log_file: String,
    log_filter: String,
}

impl DemoConfig {
    pub fn load() -> Self {
        Self {
            log_dir: dotenvy::var(LOG_DIR)
                .unwrap_or_else(|_| DEFAULT_LOG_DIR.into())
                .into(),
            log_file: dotenvy::var(LOG_FILE).unwrap_or_else(|_| DEFAULT_LOG_FILE.into()),
            log_filter: dotenvy::var(RUST_LOG).unwrap_or_else(|_| DEFAULT_FILTER.into()),
        }
    }
}
