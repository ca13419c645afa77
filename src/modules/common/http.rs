// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::galsync_version;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::GalSyncResult;
use crate::modules::settings::cli::SETTINGS;
use crate::raise_error;
use bytes::Bytes;
use reqwest::StatusCode;
use std::time::Duration;

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> GalSyncResult<HttpClient> {
        let timeout = Duration::from_secs(SETTINGS.galsync_http_timeout_seconds);
        let client = reqwest::ClientBuilder::new()
            .user_agent(format!("GalSync/{}", galsync_version!()))
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| {
                raise_error!(
                    format!("Failed to build HTTP client: {:#?}", e),
                    ErrorCode::InternalError
                )
            })?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str, access_token: &str) -> GalSyncResult<serde_json::Value> {
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        let response = Self::check_status(response, url).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))
    }

    /// GET a binary payload. A 404 is reported as `None`, not an error.
    pub async fn get_bytes(
        &self,
        url: &str,
        access_token: &str,
    ) -> GalSyncResult<Option<Bytes>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response, url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        Ok(Some(bytes))
    }

    pub async fn post(
        &self,
        url: &str,
        access_token: &str,
        payload: &serde_json::Value,
    ) -> GalSyncResult<serde_json::Value> {
        let response = self
            .client
            .post(url)
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        let response = Self::check_status(response, url).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))
    }

    pub async fn put_bytes(
        &self,
        url: &str,
        access_token: &str,
        body: Bytes,
        content_type: &str,
    ) -> GalSyncResult<()> {
        let response = self
            .client
            .put(url)
            .bearer_auth(access_token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        Self::check_status(response, url).await?;
        Ok(())
    }

    pub async fn delete(&self, url: &str, access_token: &str) -> GalSyncResult<()> {
        let response = self
            .client
            .delete(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| raise_error!(format!("{:#?}", e), ErrorCode::NetworkError))?;
        Self::check_status(response, url).await?;
        Ok(())
    }

    async fn check_status(
        response: reqwest::Response,
        url: &str,
    ) -> GalSyncResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(raise_error!(
            format!("Request to {} failed with status {}: {}", url, status, body),
            ErrorCode::HttpResponseError
        ))
    }
}
