//! Oracle account attribute names
//!
//! The full attribute surface this connector understands, and the
//! subset that full update accepts. The two date attributes are
//! derived by the database and therefore read-only.

/// New password for the account.
pub const PASSWORD: &str = "password";

/// Boolean flag: expire (or un-expire) the account's password.
pub const PASSWORD_EXPIRED: &str = "passwordExpired";

/// Read-only: when the password will expire.
pub const PASSWORD_EXPIRATION_DATE: &str = "passwordExpirationDate";

/// Read-only: when the account will be disabled.
pub const DISABLE_DATE: &str = "disableDate";

/// Boolean flag: account lock state.
pub const ENABLED: &str = "enabled";

/// Oracle profile assigned to the account.
pub const PROFILE: &str = "profile";

/// Default tablespace.
pub const DEFAULT_TABLESPACE: &str = "defaultTablespace";

/// Temporary tablespace.
pub const TEMPORARY_TABLESPACE: &str = "temporaryTablespace";

/// Quota on the default tablespace.
pub const QUOTA: &str = "quota";

/// Quota on the temporary tablespace.
pub const TEMPORARY_QUOTA: &str = "temporaryQuota";

/// Authentication mode (local, external, global).
pub const AUTHENTICATION: &str = "authentication";

/// Global name for globally authenticated accounts.
pub const GLOBAL_NAME: &str = "globalName";

/// Role membership (multi-valued).
pub const ROLES: &str = "roles";

/// System/object privileges (multi-valued).
pub const PRIVILEGES: &str = "privileges";

/// Every attribute name this connector understands.
pub const ALL: &[&str] = &[
    PASSWORD,
    PASSWORD_EXPIRED,
    PASSWORD_EXPIRATION_DATE,
    DISABLE_DATE,
    ENABLED,
    PROFILE,
    DEFAULT_TABLESPACE,
    TEMPORARY_TABLESPACE,
    QUOTA,
    TEMPORARY_QUOTA,
    AUTHENTICATION,
    GLOBAL_NAME,
    ROLES,
    PRIVILEGES,
];

/// Attributes legal in a full update: everything except the two
/// read-only date attributes.
pub const UPDATABLE: &[&str] = &[
    PASSWORD,
    PASSWORD_EXPIRED,
    ENABLED,
    PROFILE,
    DEFAULT_TABLESPACE,
    TEMPORARY_TABLESPACE,
    QUOTA,
    TEMPORARY_QUOTA,
    AUTHENTICATION,
    GLOBAL_NAME,
    ROLES,
    PRIVILEGES,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updatable_excludes_readonly_dates() {
        assert!(!UPDATABLE.contains(&PASSWORD_EXPIRATION_DATE));
        assert!(!UPDATABLE.contains(&DISABLE_DATE));
    }

    #[test]
    fn test_updatable_is_all_minus_readonly() {
        for name in UPDATABLE {
            assert!(ALL.contains(name), "'{name}' missing from ALL");
        }
        assert_eq!(ALL.len(), UPDATABLE.len() + 2);
    }

    #[test]
    fn test_no_duplicate_names() {
        let mut names: Vec<&str> = ALL.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
