// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, info, warn};

use crate::modules::context::RunContext;
use crate::modules::directory::{self, is_user_member};
use crate::modules::error::{code::ErrorCode, GalSyncResult};
use crate::modules::graph::model::DirectoryMember;
use crate::raise_error;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DestinationMailbox {
    pub address: String,
    pub display_name: String,
}

/// Expand the destination group into mailboxes, in directory enumeration
/// order. The group lookup itself is fatal; a member that fails to resolve
/// is logged and skipped so one bad entry cannot block the rest.
pub async fn resolve_destinations(ctx: &RunContext) -> GalSyncResult<Vec<DestinationMailbox>> {
    let group = &ctx.run.destination_group;
    let members = directory::get_group_members(&ctx.graph, group).await?;

    let mut result = Vec::with_capacity(members.len());
    for member in members {
        if !is_user_member(&member) {
            debug!(group = %group, member_id = %member.id, "group member is not a user, skipping");
            continue;
        }
        if let Some(dest) = resolve_member(ctx, member).await {
            result.push(dest);
        }
    }

    if result.is_empty() {
        return Err(raise_error!(
            format!("No destination mailboxes resolved from group {}", group),
            ErrorCode::EmptyDestinationGroup
        ));
    }
    info!(group = %group, count = result.len(), "resolved destination mailboxes");
    Ok(result)
}

async fn resolve_member(ctx: &RunContext, member: DirectoryMember) -> Option<DestinationMailbox> {
    if let Some(mail) = member.mail.filter(|m| !m.is_empty()) {
        let display_name = member.display_name.unwrap_or_else(|| mail.clone());
        return Some(DestinationMailbox {
            address: mail,
            display_name,
        });
    }

    // The member listing came back without a mail attribute; ask the
    // directory for the user record itself.
    match directory::get_user(&ctx.graph, &member.id).await {
        Ok(user) => match user.mail.filter(|m| !m.is_empty()) {
            Some(mail) => {
                let display_name = user.display_name.unwrap_or_else(|| mail.clone());
                Some(DestinationMailbox {
                    address: mail,
                    display_name,
                })
            }
            None => {
                warn!(member_id = %member.id, "group member has no mail address, skipping");
                None
            }
        },
        Err(error) => {
            warn!(
                member_id = %member.id,
                error = %error,
                "failed to look up group member, skipping"
            );
            None
        }
    }
}
