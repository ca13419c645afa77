// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use bytes::Bytes;
use tracing::{info, warn};

use crate::modules::context::RunContext;
use crate::modules::error::{code::ErrorCode, GalSyncResult};
use crate::modules::graph::model::Contact;
use crate::modules::mailapi::contacts;
use crate::raise_error;

/// Immutable snapshot of one source contact. Missing fields collapse to
/// empty strings here, once, so the writer copies them 1:1 without further
/// guards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SourceContact {
    pub given_name: String,
    pub surname: String,
    pub display_name: String,
    pub department: String,
    pub office_location: String,
    pub business_phone: String,
    pub mobile_phone: String,
    pub email: String,
    pub job_title: String,
    pub photo: Option<Bytes>,
}

impl SourceContact {
    pub fn from_wire(contact: Contact, photo: Option<Bytes>) -> Self {
        Self {
            given_name: contact.given_name.unwrap_or_default(),
            surname: contact.surname.unwrap_or_default(),
            display_name: contact.display_name.unwrap_or_default(),
            department: contact.department.unwrap_or_default(),
            office_location: contact.office_location.unwrap_or_default(),
            business_phone: contact
                .business_phones
                .as_ref()
                .and_then(|phones| phones.first())
                .cloned()
                .unwrap_or_default(),
            mobile_phone: contact.mobile_phone.unwrap_or_default(),
            email: contact
                .email_addresses
                .and_then(|addresses| addresses.into_iter().next())
                .and_then(|address| address.address)
                .unwrap_or_default(),
            job_title: contact.job_title.unwrap_or_default(),
            photo,
        }
    }
}

/// Read every contact of the source mailbox, photos included. An empty
/// source mailbox aborts the run; there is nothing meaningful to sync and a
/// silent empty pass would wipe every destination folder.
pub async fn read_source_contacts(ctx: &RunContext) -> GalSyncResult<Vec<SourceContact>> {
    let source = &ctx.run.source_mailbox;
    let wire = contacts::list_mailbox_contacts(&ctx.graph, source).await?;

    let mut result = Vec::with_capacity(wire.len());
    for contact in wire {
        let Some(display_name) = contact.display_name.clone().filter(|n| !n.is_empty()) else {
            warn!(
                mailbox = %source,
                contact_id = %contact.id,
                "source contact has no display name, skipping"
            );
            continue;
        };
        let photo = match contacts::fetch_contact_photo(&ctx.graph, source, &contact.id).await {
            Ok(photo) => photo,
            Err(error) => {
                warn!(
                    mailbox = %source,
                    contact = %display_name,
                    error = %error,
                    "failed to fetch contact photo"
                );
                None
            }
        };
        result.push(SourceContact::from_wire(contact, photo));
    }

    if result.is_empty() {
        return Err(raise_error!(
            format!("No contacts found in source mailbox {}", source),
            ErrorCode::EmptySourceMailbox
        ));
    }
    info!(mailbox = %source, count = result.len(), "loaded contacts from source mailbox");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::graph::model::TypedEmailAddress;

    fn wire_contact() -> Contact {
        Contact {
            id: "AAMkAGI2".into(),
            display_name: Some("Jane Doe".into()),
            given_name: Some("Jane".into()),
            surname: Some("Doe".into()),
            department: Some("Sales".into()),
            office_location: Some("22/1103".into()),
            business_phones: Some(vec!["+1 412 555 0109".into()]),
            mobile_phone: Some("+1 412 555 0198".into()),
            email_addresses: Some(vec![TypedEmailAddress {
                name: Some("Jane Doe".into()),
                address: Some("jane.doe@example.com".into()),
            }]),
            job_title: Some("Account Manager".into()),
        }
    }

    #[test]
    fn test_from_wire_copies_all_fields() {
        let snapshot = SourceContact::from_wire(wire_contact(), None);
        assert_eq!(snapshot.given_name, "Jane");
        assert_eq!(snapshot.surname, "Doe");
        assert_eq!(snapshot.display_name, "Jane Doe");
        assert_eq!(snapshot.department, "Sales");
        assert_eq!(snapshot.office_location, "22/1103");
        assert_eq!(snapshot.business_phone, "+1 412 555 0109");
        assert_eq!(snapshot.mobile_phone, "+1 412 555 0198");
        assert_eq!(snapshot.email, "jane.doe@example.com");
        assert_eq!(snapshot.job_title, "Account Manager");
        assert!(snapshot.photo.is_none());
    }

    #[test]
    fn test_from_wire_substitutes_empty_strings_for_missing_phones() {
        let mut contact = wire_contact();
        contact.business_phones = None;
        contact.mobile_phone = None;
        let snapshot = SourceContact::from_wire(contact, None);
        assert_eq!(snapshot.business_phone, "");
        assert_eq!(snapshot.mobile_phone, "");
    }

    #[test]
    fn test_from_wire_takes_first_business_phone() {
        let mut contact = wire_contact();
        contact.business_phones = Some(vec!["+1 111".into(), "+1 222".into()]);
        let snapshot = SourceContact::from_wire(contact, None);
        assert_eq!(snapshot.business_phone, "+1 111");
    }

    #[test]
    fn test_from_wire_keeps_photo_bytes() {
        let photo = Bytes::from_static(&[0xFF, 0xD8, 0xFF]);
        let snapshot = SourceContact::from_wire(wire_contact(), Some(photo.clone()));
        assert_eq!(snapshot.photo, Some(photo));
    }
}
