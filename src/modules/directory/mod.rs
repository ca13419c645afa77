// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::GalSyncResult;
use crate::modules::graph::client::{decode, GraphClient};
use crate::modules::graph::model::{DirectoryMember, User};

/// Directory page size; the members endpoint caps at 999 per page.
const MEMBER_PAGE_SIZE: u32 = 999;

const MEMBER_SELECT: &str = "id,displayName,mail";

pub async fn get_group_members(
    graph: &GraphClient,
    group_id: &str,
) -> GalSyncResult<Vec<DirectoryMember>> {
    let url = graph.url(&format!(
        "groups/{}/members?$top={}&$select={}",
        urlencoding::encode(group_id),
        MEMBER_PAGE_SIZE,
        MEMBER_SELECT
    ));
    graph
        .fetch_list::<DirectoryMember>(url, None, "DirectoryMember")
        .await
}

pub async fn get_user(graph: &GraphClient, user_id: &str) -> GalSyncResult<User> {
    let url = graph.url(&format!(
        "users/{}?$select=displayName,mail",
        urlencoding::encode(user_id)
    ));
    let value = graph.get(&url).await?;
    decode(value, "User")
}

/// Nested groups and devices also appear in member listings; only user
/// objects own a mailbox.
pub fn is_user_member(member: &DirectoryMember) -> bool {
    match member.odata_type.as_deref() {
        Some(odata_type) => odata_type == "#microsoft.graph.user",
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_user_member_filters_nested_groups() {
        let user = DirectoryMember {
            odata_type: Some("#microsoft.graph.user".into()),
            id: "u1".into(),
            ..Default::default()
        };
        let group = DirectoryMember {
            odata_type: Some("#microsoft.graph.group".into()),
            id: "g1".into(),
            ..Default::default()
        };
        let untyped = DirectoryMember {
            id: "u2".into(),
            ..Default::default()
        };
        assert!(is_user_member(&user));
        assert!(!is_user_member(&group));
        assert!(is_user_member(&untyped));
    }
}
