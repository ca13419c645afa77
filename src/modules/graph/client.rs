// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::modules::common::http::HttpClient;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::GalSyncResult;
use crate::modules::graph::auth;
use crate::modules::graph::model::ListResponse;
use crate::modules::settings::cli::SETTINGS;
use crate::raise_error;

/// Authenticated Graph connection: transport + bearer token + endpoint root.
/// Built once at startup and shared by every pipeline stage.
pub struct GraphClient {
    http: HttpClient,
    endpoint: String,
    access_token: String,
}

impl GraphClient {
    pub async fn connect() -> GalSyncResult<Self> {
        let access_token = auth::acquire_access_token().await?;
        let http = HttpClient::new()?;
        let endpoint = format!("{}/v1.0", SETTINGS.galsync_graph_endpoint);
        Ok(Self {
            http,
            endpoint,
            access_token,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    pub async fn get(&self, url: &str) -> GalSyncResult<serde_json::Value> {
        self.http.get(url, &self.access_token).await
    }

    pub async fn get_bytes(&self, url: &str) -> GalSyncResult<Option<Bytes>> {
        self.http.get_bytes(url, &self.access_token).await
    }

    pub async fn post(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> GalSyncResult<serde_json::Value> {
        self.http.post(url, &self.access_token, payload).await
    }

    pub async fn put_bytes(
        &self,
        url: &str,
        body: Bytes,
        content_type: &str,
    ) -> GalSyncResult<()> {
        self.http
            .put_bytes(url, &self.access_token, body, content_type)
            .await
    }

    pub async fn delete(&self, url: &str) -> GalSyncResult<()> {
        self.http.delete(url, &self.access_token).await
    }

    /// Follow `@odata.nextLink` pages until exhausted or `limit` items have
    /// been collected.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        first_url: String,
        limit: Option<usize>,
        what: &str,
    ) -> GalSyncResult<Vec<T>> {
        let mut url = first_url;
        let mut items: Vec<T> = Vec::new();
        loop {
            let value = self.get(&url).await?;
            let page: ListResponse<T> = decode(value, what)?;
            items.extend(page.value);
            if let Some(limit) = limit {
                if items.len() >= limit {
                    items.truncate(limit);
                    break;
                }
            }
            match page.next_link {
                Some(next) => url = next,
                None => break,
            }
        }
        Ok(items)
    }
}

pub fn decode<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> GalSyncResult<T> {
    serde_json::from_value::<T>(value).map_err(|e| {
        raise_error!(
            format!(
                "Failed to deserialize Graph API response into {}: {:#?}. Possible model mismatch or API change.",
                what, e
            ),
            ErrorCode::GraphApiCallFailed
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::graph::model::ContactFolder;

    #[test]
    fn test_decode_reports_model_mismatch() {
        let value = serde_json::json!({"displayName": "missing id"});
        let error = decode::<ContactFolder>(value, "ContactFolder").unwrap_err();
        assert_eq!(error.code(), ErrorCode::GraphApiCallFailed);
        assert!(error.to_string().contains("ContactFolder"));
    }

    #[test]
    fn test_decode_accepts_matching_shape() {
        let value = serde_json::json!({"id": "F1", "displayName": "Company Contacts"});
        let folder: ContactFolder = decode(value, "ContactFolder").unwrap();
        assert_eq!(folder.id, "F1");
        assert_eq!(folder.display_name, "Company Contacts");
    }
}
