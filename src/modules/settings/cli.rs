// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use clap::{builder::ValueParser, Parser};
use std::{path::PathBuf, sync::LazyLock};
use url::Url;

#[cfg(not(test))]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::parse);

#[cfg(test)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new_for_test);

#[derive(Debug, Parser)]
#[clap(
    name = "galsync",
    about = "Copies the contacts of a source mailbox into a named contacts folder
    of every member of a directory group, via the Microsoft Graph API.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Settings {
    /// Path to the JSON run configuration (source mailbox, destination group, folder name)
    #[clap(
        long,
        env,
        help = "Path to the JSON run configuration file",
        value_parser = ValueParser::new(|s: &str| {
            let path = PathBuf::from(s);
            if !path.exists() {
                return Err(format!("Config file {:?} does not exist", path));
            }
            if !path.is_file() {
                return Err(format!("Config path {:?} is not a file", path));
            }
            Ok(s.to_string())
        })
    )]
    pub galsync_config: String,

    /// Directory (Entra) tenant the service principal lives in
    #[clap(long, env, help = "Set the directory tenant id for token acquisition")]
    pub galsync_tenant_id: String,

    /// Application (client) id of the service principal
    #[clap(long, env, help = "Set the application client id")]
    pub galsync_client_id: String,

    /// Client secret of the service principal
    #[clap(long, env, help = "Set the application client secret")]
    pub galsync_client_secret: String,

    /// Graph endpoint root (override for national clouds)
    #[clap(
        long,
        default_value = "https://graph.microsoft.com",
        env,
        help = "Set the Graph API endpoint root",
        value_parser = ValueParser::new(|s: &str| -> Result<String, String> {
            Url::parse(s).map_err(|_| format!("Invalid URL for graph endpoint: {}", s))?;
            Ok(s.trim_end_matches('/').to_string())
        })
    )]
    pub galsync_graph_endpoint: String,

    /// Login endpoint root (override for national clouds)
    #[clap(
        long,
        default_value = "https://login.microsoftonline.com",
        env,
        help = "Set the identity provider endpoint root",
        value_parser = ValueParser::new(|s: &str| -> Result<String, String> {
            Url::parse(s).map_err(|_| format!("Invalid URL for login endpoint: {}", s))?;
            Ok(s.trim_end_matches('/').to_string())
        })
    )]
    pub galsync_login_endpoint: String,

    /// galsync log level (default: "info")
    #[clap(long, default_value = "info", env, help = "Set the log level for galsync")]
    pub galsync_log_level: String,

    /// Enable ANSI logs (default: true)
    #[clap(long, default_value = "true", env, help = "Enable ANSI formatted logs")]
    pub galsync_ansi_logs: bool,

    /// Enable log file output (default: false)
    /// If false, logs will be printed to stdout
    #[clap(
        long,
        default_value = "false",
        env,
        help = "Enable log file output (otherwise logs go to stdout)"
    )]
    pub galsync_log_to_file: bool,

    /// Directory the per-run log file is written into
    #[clap(
        long,
        default_value = "logs",
        env,
        help = "Set the directory for per-run log files"
    )]
    pub galsync_log_dir: PathBuf,

    /// Number of destination mailboxes processed at once (default: 1, strictly sequential)
    #[clap(
        long,
        default_value = "1",
        env,
        help = "Maximum number of destination mailboxes processed concurrently",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub galsync_sync_concurrency: u16,

    /// Per-request timeout for remote calls, in seconds
    #[clap(
        long,
        default_value = "30",
        env,
        help = "Set the HTTP request timeout in seconds",
        value_parser = clap::value_parser!(u64).range(1..=600)
    )]
    pub galsync_http_timeout_seconds: u64,
}

impl Settings {
    #[cfg(test)]
    fn new_for_test() -> Self {
        Self {
            galsync_config: "galsync.json".to_string(),
            galsync_tenant_id: "00000000-0000-0000-0000-000000000000".to_string(),
            galsync_client_id: "11111111-1111-1111-1111-111111111111".to_string(),
            galsync_client_secret: "test-secret".to_string(),
            galsync_graph_endpoint: "https://graph.microsoft.com".to_string(),
            galsync_login_endpoint: "https://login.microsoftonline.com".to_string(),
            galsync_log_level: "info".to_string(),
            galsync_ansi_logs: false,
            galsync_log_to_file: false,
            galsync_log_dir: "logs".into(),
            galsync_sync_concurrency: 1,
            galsync_http_timeout_seconds: 30,
        }
    }
}
