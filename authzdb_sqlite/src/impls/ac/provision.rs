//! Provisioning of the persisted records.
//!
//! Authorization itself never writes; these exist for bootstrapping a
//! database and for seeding fixtures.

use authzcore::error::BackendError;

use crate::SqliteBackend;

fn unique_violation(e: sqlx::Error) -> Result<bool, BackendError> {
    match e.as_database_error() {
        Some(db_e) if db_e.is_unique_violation() => Ok(false),
        _ => Err(e)?,
    }
}

impl SqliteBackend {
    pub async fn add_user(
        &self,
        name: &str,
    ) -> Result<i64, BackendError> {
        let id = sqlx::query(
            r#"
INSERT INTO users (
    name
)
VALUES ( ?1 )
            "#,
        )
        .bind(name)
        .execute(&*self.pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }

    pub async fn add_role(
        &self,
        name: &str,
    ) -> Result<i64, BackendError> {
        let id = sqlx::query(
            r#"
INSERT INTO auth_roles (
    name
)
VALUES ( ?1 )
            "#,
        )
        .bind(name)
        .execute(&*self.pool)
        .await?
        .last_insert_rowid();
        Ok(id)
    }

    /// Returns `false` if the role was already assigned to the user.
    pub async fn assign_role(
        &self,
        user_id: i64,
        auth_role_id: i64,
    ) -> Result<bool, BackendError> {
        match sqlx::query(
            r#"
INSERT INTO role_assignments (
    user_id,
    auth_role_id
)
VALUES ( ?1, ?2 )
            "#,
        )
        .bind(user_id)
        .bind(auth_role_id)
        .execute(&*self.pool)
        .await {
            Ok(_) => Ok(true),
            Err(e) => unique_violation(e),
        }
    }

    /// Returns `false` if the role already held this permission.
    pub async fn add_permission(
        &self,
        auth_role_id: i64,
        model_class: &str,
        method: &str,
    ) -> Result<bool, BackendError> {
        match sqlx::query(
            r#"
INSERT INTO permissions (
    auth_role_id,
    model_class,
    method
)
VALUES ( ?1, ?2, ?3 )
            "#,
        )
        .bind(auth_role_id)
        .bind(model_class)
        .bind(method)
        .execute(&*self.pool)
        .await {
            Ok(_) => Ok(true),
            Err(e) => unique_violation(e),
        }
    }
}

#[cfg(test)]
mod testing {
    use crate::SqliteBackend;

    #[async_std::test]
    async fn test_double() -> anyhow::Result<()> {
        let backend = SqliteBackend::connect("sqlite::memory:".into())
            .await?
            .migrate_authz()
            .await?;
        let user_id = backend.add_user("test_user").await?;
        let role_id = backend.add_role("editor").await?;
        assert!(backend.assign_role(user_id, role_id).await?);
        assert!(!backend.assign_role(user_id, role_id).await?);
        assert!(backend.add_permission(role_id, "Beer", "*").await?);
        assert!(!backend.add_permission(role_id, "Beer", "*").await?);
        assert!(backend.add_permission(role_id, "Beer", "edit").await?);
        Ok(())
    }

    #[async_std::test]
    async fn test_references_enforced() -> anyhow::Result<()> {
        let backend = SqliteBackend::connect("sqlite::memory:".into())
            .await?
            .migrate_authz()
            .await?;
        assert!(backend.add_permission(42, "Beer", "*").await.is_err());
        let user_id = backend.add_user("test_user").await?;
        assert!(backend.assign_role(user_id, 42).await.is_err());
        Ok(())
    }
}
