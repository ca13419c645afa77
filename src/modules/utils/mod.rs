// Copyright © 2025 galsync.io
// Licensed under GalSync License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use super::error::code::ErrorCode;
use crate::raise_error;

#[macro_export]
macro_rules! galsync_version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
}

#[macro_export]
macro_rules! raise_error {
    ($msg:expr, $code:expr) => {
        $crate::modules::error::GalSyncError::Generic {
            message: $msg,
            location: snafu::Location::default(),
            code: $code,
        }
    };
}

#[macro_export]
macro_rules! current_datetime {
    () => {{
        use chrono::Local;
        let now = Local::now();
        now.format("%Y%m%d%H%M").to_string()
    }};
}

#[macro_export]
macro_rules! validate_email {
    ($email:expr) => {{
        $crate::modules::utils::validate_email($email)
    }};
}

pub fn validate_email(email: &str) -> crate::modules::error::GalSyncResult<()> {
    use std::str::FromStr;
    let email_address = email_address::EmailAddress::from_str(email).map_err(|_| {
        raise_error!(
            format!("Invalid email format : {}", email),
            ErrorCode::InvalidParameter
        )
    })?;
    if email != email_address.email() {
        return Err(raise_error!(
            format!("Invalid email format: {}", email),
            ErrorCode::InvalidParameter
        ));
    }
    Ok(())
}

/// Reduce a mailbox address to a form safe for use in a log file name.
pub fn mailbox_slug(mailbox: &str) -> String {
    let re = regex::Regex::new(r"[^A-Za-z0-9]+").unwrap();
    re.replace_all(mailbox, "-")
        .trim_matches('-')
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_address() {
        assert!(validate_email("gal.sync@example.com").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_garbage() {
        assert!(validate_email("not-an-address").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_mailbox_slug_flattens_separators() {
        assert_eq!(mailbox_slug("Gal.Sync@Example.com"), "gal-sync-example-com");
        assert_eq!(mailbox_slug("a@x.com"), "a-x-com");
    }
}
