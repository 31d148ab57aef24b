use async_trait::async_trait;
use authzcore::{
    ac::traits::PermissionBackend,
    error::BackendError,
    platform::{
        DefaultAuthzPlatform,
        PlatformUrl,
    },
};
use mockall::mock;
use std::collections::BTreeSet;

mock! {
    pub Platform {}

    #[async_trait]
    impl PermissionBackend for Platform {
        async fn exists_grant(
            &self,
            user_id: i64,
            model_class: &str,
            method: &str,
        ) -> Result<bool, BackendError>;
        async fn distinct_classes_for_user(
            &self,
            user_id: i64,
        ) -> Result<BTreeSet<String>, BackendError>;
        async fn methods_for_user_and_class(
            &self,
            user_id: i64,
            model_class: &str,
        ) -> Result<Vec<String>, BackendError>;
    }
}

impl PlatformUrl for MockPlatform {
    fn url(&self) -> &str {
        "mock://"
    }
}

impl DefaultAuthzPlatform for MockPlatform {}

#[cfg(test)]
mod tests {
    use authzcore::platform::AuthzPlatform;
    use super::*;

    #[async_std::test]
    async fn smoke_test_mock_platform() -> anyhow::Result<()> {
        let mut platform = MockPlatform::new();
        platform.expect_exists_grant()
            .times(1)
            .withf(|user_id, model_class, method| {
                *user_id == 1 && model_class == "Beer" && method == "view"
            })
            .returning(|_, _, _| Ok(true));
        let platform: &dyn AuthzPlatform = platform.as_dyn();
        assert!(platform.exists_grant(1, "Beer", "view").await?);
        Ok(())
    }
}
