use mimalloc::MiMalloc;
use modules::{
    context::RunContext,
    error::GalSyncResult,
    logger,
    settings::{cli::SETTINGS, run::RunConfig},
    sync,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

mod modules;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

static LOGO: &str = r#"
   ____       _ ____
  / ___| __ _| / ___| _   _ _ __   ___
 | |  _ / _` | \___ \| | | | '_ \ / __|
 | |_| | (_| | |___) | |_| | | | | (__
  \____|\__,_|_|____/ \__, |_| |_|\___|
                      |___/
"#;

#[tokio::main]
async fn main() -> GalSyncResult<()> {
    // The log file name is derived from the source mailbox, so the config
    // has to load before logging can start; config errors go to stderr.
    let run = match RunConfig::load(Path::new(&SETTINGS.galsync_config)) {
        Ok(run) => run,
        Err(error) => {
            eprintln!("{:?}", error);
            return Err(error);
        }
    };
    logger::initialize_logging(&run);
    info!("{}", LOGO);
    info!("Starting galsync");
    info!("Version:  {}", galsync_version!());
    info!(
        source = %run.source_mailbox,
        group = %run.destination_group,
        folder = %run.folder_name,
        "run configuration loaded"
    );

    let ctx = match RunContext::initialize(run).await {
        Ok(ctx) => Arc::new(ctx),
        Err(error) => {
            error!("{:?}", error);
            return Err(error);
        }
    };

    match sync::run(ctx).await {
        Ok(report) => {
            info!(
                contacts_read = report.contacts_read,
                destinations = report.destinations_resolved,
                folders_created = report.folders_created,
                folders_recreated = report.folders_recreated,
                contacts_created = report.contacts_created,
                contacts_skipped = report.contacts_skipped,
                contacts_failed = report.contacts_failed,
                mailboxes_skipped = report.mailboxes_skipped,
                "contact sync run completed"
            );
            Ok(())
        }
        Err(error) => {
            error!("{:?}", error);
            Err(error)
        }
    }
}
