// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::json;

use crate::modules::error::GalSyncResult;
use crate::modules::graph::client::{decode, GraphClient};
use crate::modules::graph::model::ContactFolder;

/// Find a direct child of the mailbox's contacts folder by display name.
/// The server-side filter narrows the candidates; the final comparison is
/// case-sensitive string equality, matching the folder-existence contract.
pub async fn find_folder_by_name(
    graph: &GraphClient,
    mailbox: &str,
    name: &str,
) -> GalSyncResult<Option<ContactFolder>> {
    let url = graph.url(&format!(
        "users/{}/contactFolders?$filter=displayName eq '{}'",
        urlencoding::encode(mailbox),
        odata_quote(name)
    ));
    let folders = graph
        .fetch_list::<ContactFolder>(url, None, "ContactFolder")
        .await?;
    Ok(folders.into_iter().find(|f| f.display_name == name))
}

pub async fn create_folder(
    graph: &GraphClient,
    mailbox: &str,
    name: &str,
) -> GalSyncResult<ContactFolder> {
    let url = graph.url(&format!(
        "users/{}/contactFolders",
        urlencoding::encode(mailbox)
    ));
    let value = graph.post(&url, &json!({ "displayName": name })).await?;
    decode(value, "ContactFolder")
}

/// Hard delete: the folder and everything in it are gone, not recycled.
pub async fn delete_folder(
    graph: &GraphClient,
    mailbox: &str,
    folder_id: &str,
) -> GalSyncResult<()> {
    let url = graph.url(&format!(
        "users/{}/contactFolders/{}",
        urlencoding::encode(mailbox),
        folder_id
    ));
    graph.delete(&url).await
}

/// Single quotes double inside OData string literals.
fn odata_quote(name: &str) -> String {
    name.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odata_quote_doubles_single_quotes() {
        assert_eq!(odata_quote("O'Brien's Team"), "O''Brien''s Team");
        assert_eq!(odata_quote("Company Contacts"), "Company Contacts");
    }
}
