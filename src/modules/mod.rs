// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

pub mod common;
pub mod context;
pub mod directory;
pub mod error;
pub mod graph;
pub mod logger;
pub mod mailapi;
pub mod settings;
pub mod sync;
pub mod utils;
