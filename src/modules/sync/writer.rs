// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use ahash::AHashSet;
use serde_json::json;
use tracing::{error, info, warn};

use crate::modules::context::RunContext;
use crate::modules::error::GalSyncResult;
use crate::modules::graph::model::ContactFolder;
use crate::modules::mailapi::contacts;
use crate::modules::sync::reader::SourceContact;
use crate::modules::sync::resolver::DestinationMailbox;

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct WriteStats {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Copy every source contact into the destination folder, skipping names
/// that already exist there. The folder's contents are listed once up front;
/// existence is a set lookup, not a remote probe per contact. Returns `Err`
/// only when that initial listing fails; per-contact failures are logged
/// and counted, never propagated.
pub async fn write_contacts(
    ctx: &RunContext,
    dest: &DestinationMailbox,
    folder: &ContactFolder,
    source_contacts: &[SourceContact],
) -> GalSyncResult<WriteStats> {
    let mailbox = &dest.address;
    let existing =
        contacts::list_folder_contact_names(&ctx.graph, mailbox, &folder.id).await?;
    let mut present: AHashSet<String> = existing.into_iter().collect();

    let mut stats = WriteStats::default();
    for contact in source_contacts {
        if present.contains(&contact.display_name) {
            info!(
                mailbox = %mailbox,
                contact = %contact.display_name,
                "contact already exists, skipping"
            );
            stats.skipped += 1;
            continue;
        }

        match contacts::create_contact(
            &ctx.graph,
            mailbox,
            &folder.id,
            &contact_payload(contact),
        )
        .await
        {
            Ok(created) => {
                stats.created += 1;
                present.insert(contact.display_name.clone());
                info!(
                    mailbox = %mailbox,
                    contact = %contact.display_name,
                    "created contact"
                );
                if let Some(photo) = &contact.photo {
                    if let Err(err) = contacts::upload_contact_photo(
                        &ctx.graph,
                        mailbox,
                        &folder.id,
                        &created.id,
                        photo.clone(),
                    )
                    .await
                    {
                        warn!(
                            mailbox = %mailbox,
                            contact = %contact.display_name,
                            error = %err,
                            "failed to attach contact photo"
                        );
                    }
                }
            }
            Err(err) => {
                error!(
                    mailbox = %mailbox,
                    contact = %contact.display_name,
                    error = %err,
                    "failed to create contact"
                );
                stats.failed += 1;
            }
        }
    }
    Ok(stats)
}

/// The create-contact request body: a 1:1 copy of the source snapshot.
/// Empty strings ride along as empty strings; the snapshot already absorbed
/// every missing source field.
pub fn contact_payload(contact: &SourceContact) -> serde_json::Value {
    json!({
        "givenName": contact.given_name,
        "surname": contact.surname,
        "displayName": contact.display_name,
        "department": contact.department,
        "officeLocation": contact.office_location,
        "businessPhones": [contact.business_phone],
        "mobilePhone": contact.mobile_phone,
        "emailAddresses": [{
            "address": contact.email,
            "name": contact.display_name,
        }],
        "jobTitle": contact.job_title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SourceContact {
        SourceContact {
            given_name: "Jane".into(),
            surname: "Doe".into(),
            display_name: "Jane Doe".into(),
            department: "Sales".into(),
            office_location: "22/1103".into(),
            business_phone: "+1 412 555 0109".into(),
            mobile_phone: "".into(),
            email: "jane.doe@example.com".into(),
            job_title: "Account Manager".into(),
            photo: None,
        }
    }

    #[test]
    fn test_contact_payload_copies_fields_one_to_one() {
        let payload = contact_payload(&snapshot());
        assert_eq!(payload["givenName"], "Jane");
        assert_eq!(payload["surname"], "Doe");
        assert_eq!(payload["displayName"], "Jane Doe");
        assert_eq!(payload["department"], "Sales");
        assert_eq!(payload["officeLocation"], "22/1103");
        assert_eq!(payload["businessPhones"][0], "+1 412 555 0109");
        assert_eq!(payload["jobTitle"], "Account Manager");
        assert_eq!(payload["emailAddresses"][0]["address"], "jane.doe@example.com");
        assert_eq!(payload["emailAddresses"][0]["name"], "Jane Doe");
    }

    #[test]
    fn test_contact_payload_keeps_missing_phone_as_empty_string() {
        let payload = contact_payload(&snapshot());
        assert_eq!(payload["mobilePhone"], "");
        assert_eq!(payload["businessPhones"].as_array().unwrap().len(), 1);
    }
}
