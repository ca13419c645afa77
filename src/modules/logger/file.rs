use crate::current_datetime;
use crate::modules::logger::{validate_log_level, LocalTimer};
use crate::modules::settings::cli::SETTINGS;
use crate::modules::settings::run::RunConfig;
use crate::modules::utils::mailbox_slug;
use std::sync::OnceLock;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;

pub static LOG_WORKER_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub fn setup_file_logger(
    run: &RunConfig,
) -> Result<(), tracing::dispatcher::SetGlobalDefaultError> {
    validate_log_level(&SETTINGS.galsync_log_level);
    let level = SETTINGS.galsync_log_level.parse::<Level>().unwrap();
    let with_ansi = SETTINGS.galsync_ansi_logs;

    let (run_nonb, run_guard) = run_log_writer(run);
    LOG_WORKER_GUARD.set(run_guard).unwrap();

    let run_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(with_ansi)
        .with_level(true)
        .with_writer(run_nonb)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(run_layer);

    tracing::subscriber::set_global_default(subscriber)
}

/// One log file per run, named after the source mailbox and the start time.
fn run_log_writer(run: &RunConfig) -> (NonBlocking, WorkerGuard) {
    std::fs::create_dir_all(&SETTINGS.galsync_log_dir)
        .expect("failed to create log directory");
    let file_name = run_log_file_name(&run.source_mailbox);
    let appender = rolling::never(&SETTINGS.galsync_log_dir, file_name);
    let (nb, wg) = tracing_appender::non_blocking(appender);
    (nb, wg)
}

fn run_log_file_name(source_mailbox: &str) -> String {
    format!(
        "galsync-{}-{}.log",
        mailbox_slug(source_mailbox),
        current_datetime!()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_log_file_name_is_filesystem_safe() {
        let name = run_log_file_name("Gal.Sync@Example.com");
        assert!(name.starts_with("galsync-gal-sync-example-com-"));
        assert!(name.ends_with(".log"));
        assert!(!name.contains('@'));
        assert!(!name.contains(' '));
    }
}
