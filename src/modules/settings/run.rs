use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    modules::error::{code::ErrorCode, GalSyncResult},
    raise_error, validate_email,
};

/// The three run parameters every sync needs. Loaded once at startup,
/// immutable for the lifetime of the run.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Mailbox whose contacts are copied out
    pub source_mailbox: String,
    /// Directory group whose members receive the contacts
    pub destination_group: String,
    /// Display name of the contacts sub-folder recreated in each destination
    pub folder_name: String,
}

impl RunConfig {
    pub fn load(path: &Path) -> GalSyncResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            raise_error!(
                format!("Failed to read config file {:?}: {:#?}", path, e),
                ErrorCode::ConfigFileInvalid
            )
        })?;
        let config: RunConfig = serde_json::from_str(&raw).map_err(|e| {
            raise_error!(
                format!("Failed to parse config file {:?}: {:#?}", path, e),
                ErrorCode::ConfigFileInvalid
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> GalSyncResult<()> {
        validate_email!(&self.source_mailbox)?;
        if self.destination_group.trim().is_empty() {
            return Err(raise_error!(
                "'destination_group' cannot be empty.".into(),
                ErrorCode::InvalidParameter
            ));
        }
        if self.folder_name.trim().is_empty() {
            return Err(raise_error!(
                "'folder_name' cannot be empty.".into(),
                ErrorCode::InvalidParameter
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::error::code::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"{
                "source_mailbox": "gal@example.com",
                "destination_group": "sales-team",
                "folder_name": "Company Contacts"
            }"#,
        );
        let config = RunConfig::load(file.path()).unwrap();
        assert_eq!(config.source_mailbox, "gal@example.com");
        assert_eq!(config.destination_group, "sales-team");
        assert_eq!(config.folder_name, "Company Contacts");
    }

    #[test]
    fn test_load_rejects_missing_file() {
        let error = RunConfig::load(Path::new("/nonexistent/galsync.json")).unwrap_err();
        assert_eq!(error.code(), ErrorCode::ConfigFileInvalid);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let file = write_config("{ not json");
        let error = RunConfig::load(file.path()).unwrap_err();
        assert_eq!(error.code(), ErrorCode::ConfigFileInvalid);
    }

    #[test]
    fn test_load_rejects_invalid_source_mailbox() {
        let file = write_config(
            r#"{
                "source_mailbox": "not-a-mailbox",
                "destination_group": "sales-team",
                "folder_name": "Company Contacts"
            }"#,
        );
        let error = RunConfig::load(file.path()).unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidParameter);
    }

    #[test]
    fn test_load_rejects_blank_folder_name() {
        let file = write_config(
            r#"{
                "source_mailbox": "gal@example.com",
                "destination_group": "sales-team",
                "folder_name": "   "
            }"#,
        );
        let error = RunConfig::load(file.path()).unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidParameter);
    }
}
