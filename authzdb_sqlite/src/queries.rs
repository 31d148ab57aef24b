//! The fixed query texts run against the persisted schema.
//!
//! These are executed as persistent statements, so every pooled
//! connection prepares each of them once and reuses the prepared
//! statement from its own statement cache afterwards.

/// Selects at most one permission granting the method (or the wildcard)
/// on the model class to the user.
pub const EXISTS_GRANT: &str = r#"
SELECT
    permissions.id
FROM
    permissions
JOIN
    role_assignments ON role_assignments.auth_role_id = permissions.auth_role_id
WHERE
    role_assignments.user_id = ?1 AND
    permissions.model_class = ?2 AND
    (permissions.method = ?3 OR permissions.method = '*')
LIMIT 1
"#;

pub const DISTINCT_CLASSES_FOR_USER: &str = r#"
SELECT DISTINCT
    permissions.model_class
FROM
    permissions
JOIN
    role_assignments ON role_assignments.auth_role_id = permissions.auth_role_id
WHERE
    role_assignments.user_id = ?1
"#;

pub const METHODS_FOR_USER_AND_CLASS: &str = r#"
SELECT
    permissions.method
FROM
    permissions
JOIN
    role_assignments ON role_assignments.auth_role_id = permissions.auth_role_id
WHERE
    role_assignments.user_id = ?1 AND
    permissions.model_class = ?2
"#;
