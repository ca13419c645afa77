// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{error, info};

use crate::modules::context::RunContext;
use crate::modules::graph::model::ContactFolder;
use crate::modules::mailapi::folders;
use crate::modules::sync::resolver::DestinationMailbox;

/// What the folder rebuild left behind. Never a nullable handle: a mailbox
/// either has a fresh folder to write into or is skipped outright.
#[derive(Debug)]
pub enum RebuildOutcome {
    Created(ContactFolder),
    Recreated(ContactFolder),
    Skipped,
}

/// Ensure the destination mailbox has a fresh, empty folder with the
/// configured name: delete any previous folder of that name, then create a
/// new one. When the delete fails the previous folder is left untouched and
/// the mailbox is skipped; nothing is ever written into stale contents the
/// run was told to discard.
pub async fn rebuild_destination_folder(
    ctx: &RunContext,
    dest: &DestinationMailbox,
) -> RebuildOutcome {
    let mailbox = &dest.address;
    let name = &ctx.run.folder_name;

    let existing = match folders::find_folder_by_name(&ctx.graph, mailbox, name).await {
        Ok(existing) => existing,
        Err(err) => {
            error!(mailbox = %mailbox, error = %err, "failed to list contact folders");
            return RebuildOutcome::Skipped;
        }
    };

    match existing {
        None => match folders::create_folder(&ctx.graph, mailbox, name).await {
            Ok(folder) => {
                info!(mailbox = %mailbox, folder = %name, "created destination folder");
                RebuildOutcome::Created(folder)
            }
            Err(err) => {
                error!(mailbox = %mailbox, folder = %name, error = %err, "failed to create destination folder");
                RebuildOutcome::Skipped
            }
        },
        Some(previous) => {
            if let Err(err) = folders::delete_folder(&ctx.graph, mailbox, &previous.id).await {
                error!(
                    mailbox = %mailbox,
                    folder = %name,
                    error = %err,
                    "failed to delete previous destination folder, leaving it untouched"
                );
                return RebuildOutcome::Skipped;
            }
            match folders::create_folder(&ctx.graph, mailbox, name).await {
                Ok(folder) => {
                    info!(mailbox = %mailbox, folder = %name, "recreated destination folder");
                    RebuildOutcome::Recreated(folder)
                }
                Err(err) => {
                    error!(mailbox = %mailbox, folder = %name, error = %err, "failed to recreate destination folder");
                    RebuildOutcome::Skipped
                }
            }
        }
    }
}
