use authzdb_sqlite::SqliteBackend;

/// Identifiers of the records seeded by `create_seeded_backend`.
///
/// Roles and their permissions:
///
/// - `editor`: `Beer` with `*`
/// - `viewer`: `Beer` with `view`
/// - `cellar`: `Wine` with `view`
/// - `reviewer` and `auditor`: both `Beer` with `edit`
#[derive(Clone, Copy, Debug)]
pub struct Seeded {
    /// Assigned `editor`.
    pub u1: i64,
    /// Assigned `viewer`.
    pub u2: i64,
    /// Assigned `editor` and `cellar`.
    pub u3: i64,
    /// Assigned `reviewer` and `auditor`.
    pub u4: i64,
    /// Holds no roles.
    pub nobody: i64,
}

pub async fn create_sqlite_backend() -> anyhow::Result<SqliteBackend> {
    Ok(SqliteBackend::connect("sqlite::memory:".into())
        .await?
        .migrate_authz()
        .await?)
}

pub async fn create_seeded_backend() -> anyhow::Result<(SqliteBackend, Seeded)> {
    let backend = create_sqlite_backend().await?;

    let editor = backend.add_role("editor").await?;
    let viewer = backend.add_role("viewer").await?;
    let cellar = backend.add_role("cellar").await?;
    let reviewer = backend.add_role("reviewer").await?;
    let auditor = backend.add_role("auditor").await?;
    backend.add_permission(editor, "Beer", "*").await?;
    backend.add_permission(viewer, "Beer", "view").await?;
    backend.add_permission(cellar, "Wine", "view").await?;
    backend.add_permission(reviewer, "Beer", "edit").await?;
    backend.add_permission(auditor, "Beer", "edit").await?;

    let seeded = Seeded {
        u1: backend.add_user("u1").await?,
        u2: backend.add_user("u2").await?,
        u3: backend.add_user("u3").await?,
        u4: backend.add_user("u4").await?,
        nobody: backend.add_user("nobody").await?,
    };
    backend.assign_role(seeded.u1, editor).await?;
    backend.assign_role(seeded.u2, viewer).await?;
    backend.assign_role(seeded.u3, editor).await?;
    backend.assign_role(seeded.u3, cellar).await?;
    backend.assign_role(seeded.u4, reviewer).await?;
    backend.assign_role(seeded.u4, auditor).await?;

    Ok((backend, seeded))
}
