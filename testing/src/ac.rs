use authzac::platform::{
    Builder,
    Platform,
};
use authzcore::ac::{
    agent::Agent,
    user::User,
};
use std::sync::Arc;

use crate::model::{
    create_seeded_backend,
    Seeded,
};

pub async fn create_sqlite_platform() -> anyhow::Result<(Arc<Platform>, Seeded)> {
    let (backend, seeded) = create_seeded_backend().await?;
    let platform = Builder::new()
        .authz_platform(backend)
        .build()?;
    Ok((platform, seeded))
}

pub fn agent(id: i64) -> Agent {
    User {
        id,
        name: format!("user{id}"),
    }.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn smoke_test_create_platform() -> anyhow::Result<()> {
        let (platform, seeded) = create_sqlite_platform().await?;
        assert!(platform.is_authorized(&agent(seeded.u1), "delete", "Beer").await?);
        Ok(())
    }
}
