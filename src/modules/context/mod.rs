// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::error::GalSyncResult;
use crate::modules::graph::client::GraphClient;
use crate::modules::settings::cli::SETTINGS;
use crate::modules::settings::run::RunConfig;

/// Everything a pipeline stage needs, assembled once at startup and
/// read-only afterwards. There is no other shared run state.
pub struct RunContext {
    pub run: RunConfig,
    pub graph: GraphClient,
    pub concurrency: usize,
}

impl RunContext {
    pub async fn initialize(run: RunConfig) -> GalSyncResult<Self> {
        let graph = GraphClient::connect().await?;
        Ok(Self {
            run,
            graph,
            concurrency: SETTINGS.galsync_sync_concurrency as usize,
        })
    }
}
