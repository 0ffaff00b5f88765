//! Command-line configuration.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the parsed [`Config`]
//! is installed once into a process-wide cell before the program starts and
//! read back by the app during `init`.

use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::time::Duration;

/// Members endpoint used when no URL is given.
pub const DEFAULT_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Terminal admin dashboard for user records.
#[derive(Parser, Debug, Clone)]
#[command(name = "admin-dashboard", version, about)]
pub struct Args {
    /// URL of the JSON array of users.
    #[arg(long, env = "ADMIN_DASHBOARD_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Give up on the request after this many seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where to write logs; the terminal is owned by the UI.
    #[arg(long, default_value = "admin-dashboard.log")]
    pub log_file: PathBuf,

    /// Log filter, e.g. `info` or `admin_dashboard=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Render inline instead of on the alternate screen.
    #[arg(long)]
    pub no_alt_screen: bool,
}

/// Settings the running app needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Users endpoint.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            url: args.url.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}

impl Config {
    /// Installs the process-wide config. Only the first call has an effect.
    pub fn install(self) -> bool {
        CONFIG.set(self).is_ok()
    }

    /// The installed config, or the defaults if none was installed.
    pub fn current() -> Config {
        CONFIG.get().cloned().unwrap_or_default()
    }
}
