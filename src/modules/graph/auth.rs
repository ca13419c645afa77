// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use oauth2::basic::BasicClient;
use oauth2::{ClientId, ClientSecret, Scope, TokenResponse, TokenUrl};

use crate::modules::error::code::ErrorCode;
use crate::modules::error::GalSyncResult;
use crate::modules::settings::cli::SETTINGS;
use crate::raise_error;

/// Acquire an app-only bearer token via the client-credentials grant.
///
/// One service principal acts on every mailbox in the run; there are no
/// per-mailbox credentials. The token is fetched once at startup and reused
/// for every call; a run is far shorter than the token's validity window.
pub async fn acquire_access_token() -> GalSyncResult<String> {
    let token_url = TokenUrl::new(format!(
        "{}/{}/oauth2/v2.0/token",
        SETTINGS.galsync_login_endpoint, SETTINGS.galsync_tenant_id
    ))
    .map_err(|e| {
        raise_error!(
            format!("Invalid token endpoint URL: {:#?}", e),
            ErrorCode::MissingConfiguration
        )
    })?;

    let client = BasicClient::new(ClientId::new(SETTINGS.galsync_client_id.clone()))
        .set_client_secret(ClientSecret::new(SETTINGS.galsync_client_secret.clone()))
        .set_token_uri(token_url);

    let http_client = oauth2::reqwest::ClientBuilder::new()
        .redirect(oauth2::reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| {
            raise_error!(
                format!("Failed to build token HTTP client: {:#?}", e),
                ErrorCode::InternalError
            )
        })?;

    let token = client
        .exchange_client_credentials()
        .add_scope(Scope::new(default_scope()))
        .request_async(&http_client)
        .await
        .map_err(|e| {
            raise_error!(
                format!("Token acquisition failed: {:#}", e),
                ErrorCode::TokenAcquisitionFailed
            )
        })?;

    Ok(token.access_token().secret().clone())
}

fn default_scope() -> String {
    format!("{}/.default", SETTINGS.galsync_graph_endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_targets_graph_endpoint() {
        assert_eq!(default_scope(), "https://graph.microsoft.com/.default");
    }
}
