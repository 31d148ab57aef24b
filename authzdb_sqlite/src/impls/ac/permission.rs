use async_trait::async_trait;
use authzcore::{
    ac::traits::PermissionBackend,
    error::BackendError,
};
use futures::TryStreamExt;
use std::collections::BTreeSet;

use crate::{
    queries,
    SqliteBackend,
};

fn require_non_empty(
    name: &str,
    value: &str,
) -> Result<(), BackendError> {
    if value.is_empty() {
        Err(BackendError::AppInvariantViolation(format!(
            "refusing to query permissions with an empty {name}"
        )))
    } else {
        Ok(())
    }
}

async fn exists_grant_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    model_class: &str,
    method: &str,
) -> Result<bool, BackendError> {
    require_non_empty("model_class", model_class)?;
    require_non_empty("method", method)?;
    let rec = sqlx::query_scalar::<_, i64>(queries::EXISTS_GRANT)
        .persistent(true)
        .bind(user_id)
        .bind(model_class)
        .bind(method)
        .fetch_optional(&*backend.pool)
        .await?;
    Ok(rec.is_some())
}

async fn distinct_classes_for_user_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
) -> Result<BTreeSet<String>, BackendError> {
    Ok(sqlx::query_scalar::<_, String>(queries::DISTINCT_CLASSES_FOR_USER)
        .persistent(true)
        .bind(user_id)
        .fetch(&*backend.pool)
        .try_collect::<BTreeSet<_>>()
        .await?)
}

async fn methods_for_user_and_class_sqlite(
    backend: &SqliteBackend,
    user_id: i64,
    model_class: &str,
) -> Result<Vec<String>, BackendError> {
    require_non_empty("model_class", model_class)?;
    Ok(sqlx::query_scalar::<_, String>(queries::METHODS_FOR_USER_AND_CLASS)
        .persistent(true)
        .bind(user_id)
        .bind(model_class)
        .fetch_all(&*backend.pool)
        .await?)
}

#[async_trait]
impl PermissionBackend for SqliteBackend {
    async fn exists_grant(
        &self,
        user_id: i64,
        model_class: &str,
        method: &str,
    ) -> Result<bool, BackendError> {
        exists_grant_sqlite(
            &self,
            user_id,
            model_class,
            method,
        ).await
    }

    async fn distinct_classes_for_user(
        &self,
        user_id: i64,
    ) -> Result<BTreeSet<String>, BackendError> {
        distinct_classes_for_user_sqlite(
            &self,
            user_id,
        ).await
    }

    async fn methods_for_user_and_class(
        &self,
        user_id: i64,
        model_class: &str,
    ) -> Result<Vec<String>, BackendError> {
        methods_for_user_and_class_sqlite(
            &self,
            user_id,
            model_class,
        ).await
    }
}
