use async_trait::async_trait;
use std::collections::BTreeSet;
use crate::error::BackendError;

/// The relational lookups backing every authorization decision.  All
/// methods are read-only.
#[async_trait]
pub trait PermissionBackend {
    /// Whether any role assigned to `user_id` grants `method` (or the
    /// wildcard) on `model_class`.
    async fn exists_grant(
        &self,
        user_id: i64,
        model_class: &str,
        method: &str,
    ) -> Result<bool, BackendError>;
    /// Every model class on which `user_id` holds at least one
    /// permission.
    async fn distinct_classes_for_user(
        &self,
        user_id: i64,
    ) -> Result<BTreeSet<String>, BackendError>;
    /// Every method granted to `user_id` on `model_class`, one entry per
    /// matching permission row, in the order produced by the backend.
    async fn methods_for_user_and_class(
        &self,
        user_id: i64,
        model_class: &str,
    ) -> Result<Vec<String>, BackendError>;
}
