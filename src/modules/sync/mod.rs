// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::common::parallel::run_with_limit;
use crate::modules::context::RunContext;
use crate::modules::error::GalSyncResult;
use crate::modules::sync::reader::SourceContact;
use crate::modules::sync::rebuild::RebuildOutcome;
use crate::modules::sync::resolver::DestinationMailbox;

pub mod reader;
pub mod rebuild;
pub mod resolver;
pub mod writer;

/// Aggregate counters for one run; the final log line and the tests read
/// the run's outcome from here.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct SyncReport {
    pub contacts_read: usize,
    pub destinations_resolved: usize,
    pub folders_created: usize,
    pub folders_recreated: usize,
    pub contacts_created: usize,
    pub contacts_skipped: usize,
    pub contacts_failed: usize,
    pub mailboxes_skipped: usize,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct MailboxReport {
    pub folders_created: usize,
    pub folders_recreated: usize,
    pub contacts_created: usize,
    pub contacts_skipped: usize,
    pub contacts_failed: usize,
    pub mailbox_skipped: bool,
}

impl SyncReport {
    fn absorb(&mut self, mailbox: MailboxReport) {
        self.folders_created += mailbox.folders_created;
        self.folders_recreated += mailbox.folders_recreated;
        self.contacts_created += mailbox.contacts_created;
        self.contacts_skipped += mailbox.contacts_skipped;
        self.contacts_failed += mailbox.contacts_failed;
        if mailbox.mailbox_skipped {
            self.mailboxes_skipped += 1;
        }
    }
}

/// The whole pipeline: read source contacts, resolve the destination group,
/// then rebuild the folder and copy the contacts for every member. Only the
/// reader and resolver can abort the run; everything past them degrades to
/// logged, counted failures.
pub async fn run(ctx: Arc<RunContext>) -> GalSyncResult<SyncReport> {
    let contacts = reader::read_source_contacts(&ctx).await?;
    let destinations = resolver::resolve_destinations(&ctx).await?;

    let mut report = SyncReport {
        contacts_read: contacts.len(),
        destinations_resolved: destinations.len(),
        ..Default::default()
    };

    if ctx.concurrency <= 1 {
        for dest in &destinations {
            report.absorb(process_mailbox(&ctx, dest, &contacts).await);
        }
    } else {
        let contacts = Arc::new(contacts);
        let worker_ctx = ctx.clone();
        let outcomes = run_with_limit(ctx.concurrency, destinations, move |dest| {
            let ctx = worker_ctx.clone();
            let contacts = contacts.clone();
            async move { Ok(process_mailbox(&ctx, &dest, &contacts).await) }
        })
        .await?;
        for outcome in outcomes {
            report.absorb(outcome);
        }
    }

    Ok(report)
}

/// Folder rebuild strictly before any contact write; every failure inside a
/// mailbox is folded into its report so the remaining mailboxes proceed.
async fn process_mailbox(
    ctx: &RunContext,
    dest: &DestinationMailbox,
    contacts: &[SourceContact],
) -> MailboxReport {
    let mut report = MailboxReport::default();
    info!(
        mailbox = %dest.address,
        member = %dest.display_name,
        "processing destination mailbox"
    );

    let folder = match rebuild::rebuild_destination_folder(ctx, dest).await {
        RebuildOutcome::Created(folder) => {
            report.folders_created = 1;
            folder
        }
        RebuildOutcome::Recreated(folder) => {
            report.folders_recreated = 1;
            folder
        }
        RebuildOutcome::Skipped => {
            warn!(mailbox = %dest.address, "mailbox skipped");
            report.mailbox_skipped = true;
            return report;
        }
    };

    match writer::write_contacts(ctx, dest, &folder, contacts).await {
        Ok(stats) => {
            report.contacts_created = stats.created;
            report.contacts_skipped = stats.skipped;
            report.contacts_failed = stats.failed;
        }
        Err(error) => {
            warn!(mailbox = %dest.address, error = %error, "mailbox skipped");
            report.mailbox_skipped = true;
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_sums_mailbox_counters() {
        let mut report = SyncReport::default();
        report.absorb(MailboxReport {
            folders_created: 1,
            contacts_created: 2,
            ..Default::default()
        });
        report.absorb(MailboxReport {
            folders_recreated: 1,
            contacts_created: 2,
            contacts_skipped: 1,
            ..Default::default()
        });
        report.absorb(MailboxReport {
            mailbox_skipped: true,
            ..Default::default()
        });

        assert_eq!(report.folders_created, 1);
        assert_eq!(report.folders_recreated, 1);
        assert_eq!(report.contacts_created, 4);
        assert_eq!(report.contacts_skipped, 1);
        assert_eq!(report.contacts_failed, 0);
        assert_eq!(report.mailboxes_skipped, 1);
    }
}
