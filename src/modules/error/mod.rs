// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use code::ErrorCode;
use snafu::{Location, Snafu};

pub mod code;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GalSyncError {
    #[snafu(display("{message}"))]
    Generic {
        message: String,
        #[snafu(implicit)]
        location: Location,
        code: ErrorCode,
    },
}

pub type GalSyncResult<T, E = GalSyncError> = std::result::Result<T, E>;

impl GalSyncError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GalSyncError::Generic { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raise_error;

    #[test]
    fn test_error_carries_code_and_message() {
        let error = raise_error!("group lookup failed".into(), ErrorCode::GraphApiCallFailed);
        assert_eq!(error.code(), ErrorCode::GraphApiCallFailed);
        assert_eq!(error.to_string(), "group lookup failed");
    }
}
