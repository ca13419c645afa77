// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use bytes::Bytes;

use crate::modules::error::GalSyncResult;
use crate::modules::graph::client::{decode, GraphClient};
use crate::modules::graph::model::Contact;

/// Server-side page size for contact listings.
const CONTACT_PAGE_SIZE: u32 = 100;

/// Hard cap on how many contacts one source mailbox contributes to a run.
pub const MAX_SOURCE_CONTACTS: usize = 1000;

/// The first-class property set: every field the writer copies, loaded in one
/// batch instead of per-field round-trips.
const CONTACT_SELECT: &str = "id,displayName,givenName,surname,department,officeLocation,\
                              businessPhones,mobilePhone,emailAddresses,jobTitle";

pub async fn list_mailbox_contacts(
    graph: &GraphClient,
    mailbox: &str,
) -> GalSyncResult<Vec<Contact>> {
    let url = graph.url(&format!(
        "users/{}/contacts?$top={}&$select={}",
        urlencoding::encode(mailbox),
        CONTACT_PAGE_SIZE,
        CONTACT_SELECT
    ));
    graph
        .fetch_list::<Contact>(url, Some(MAX_SOURCE_CONTACTS), "Contact")
        .await
}

/// Fetch the photo bytes of a contact in the mailbox's default contacts
/// folder. Absence (404) is normal and reported as `None`.
pub async fn fetch_contact_photo(
    graph: &GraphClient,
    mailbox: &str,
    contact_id: &str,
) -> GalSyncResult<Option<Bytes>> {
    let url = graph.url(&format!(
        "users/{}/contacts/{}/photo/$value",
        urlencoding::encode(mailbox),
        contact_id
    ));
    graph.get_bytes(&url).await
}

/// One-shot listing of the display names already present in a destination
/// folder; the writer checks membership in memory instead of issuing one
/// remote probe per contact.
pub async fn list_folder_contact_names(
    graph: &GraphClient,
    mailbox: &str,
    folder_id: &str,
) -> GalSyncResult<Vec<String>> {
    let url = graph.url(&format!(
        "users/{}/contactFolders/{}/contacts?$top={}&$select=displayName",
        urlencoding::encode(mailbox),
        folder_id,
        CONTACT_PAGE_SIZE
    ));
    let contacts = graph.fetch_list::<Contact>(url, None, "Contact").await?;
    Ok(contacts.into_iter().filter_map(|c| c.display_name).collect())
}

pub async fn create_contact(
    graph: &GraphClient,
    mailbox: &str,
    folder_id: &str,
    payload: &serde_json::Value,
) -> GalSyncResult<Contact> {
    let url = graph.url(&format!(
        "users/{}/contactFolders/{}/contacts",
        urlencoding::encode(mailbox),
        folder_id
    ));
    let value = graph.post(&url, payload).await?;
    decode(value, "Contact")
}

pub async fn upload_contact_photo(
    graph: &GraphClient,
    mailbox: &str,
    folder_id: &str,
    contact_id: &str,
    photo: Bytes,
) -> GalSyncResult<()> {
    let url = graph.url(&format!(
        "users/{}/contactFolders/{}/contacts/{}/photo/$value",
        urlencoding::encode(mailbox),
        folder_id,
        contact_id
    ));
    graph.put_bytes(&url, photo, "image/jpeg").await
}
