use async_trait::async_trait;
use authzcore::platform::{
    AuthzPlatform,
    ConnectorOption,
    PlatformConnector,
    PlatformUrl,
};
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::SqliteConnectOptions,
    Sqlite,
    SqlitePool,
};
use std::{
    str::FromStr,
    sync::Arc,
};

use crate::SqliteBackend;

impl PlatformUrl for SqliteBackend {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl SqliteBackend {
    pub async fn connect(opts: ConnectorOption) -> Result<SqliteBackend, sqlx::Error> {
        if opts.auto_create_db && !Sqlite::database_exists(&opts.url).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", &opts.url);
            Sqlite::create_database(&opts.url).await?
        }

        let options = SqliteConnectOptions::from_str(&opts.url)?
            .statement_cache_capacity(opts.statement_cache_capacity);
        let pool = SqlitePool::connect_with(options).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: opts.url,
        })
    }

    pub async fn migrate_authz(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("migrations/authz").run(&*self.pool).await?;
        Ok(self)
    }

    /// Closes the underlying pool; every later query fails.
    pub async fn close(&self) {
        self.pool.close().await
    }
}

#[async_trait]
impl PlatformConnector for SqliteBackend {
    async fn authz(opts: ConnectorOption) -> Result<impl AuthzPlatform, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let backend = SqliteBackend::connect(opts).await
            .map_err(Box::new)?
            .migrate_authz()
            .await
            .map_err(Box::new)?;
        Ok(backend)
    }
}

mod ac;

mod default_impl {
    use authzcore::platform::DefaultAuthzPlatform;
    use crate::SqliteBackend;

    impl DefaultAuthzPlatform for SqliteBackend {}
}

#[cfg(test)]
pub(crate) mod tests {
    use authzcore::platform::{
        ConnectorOption,
        PlatformConnector,
        PlatformUrl,
    };
    use crate::SqliteBackend;

    #[async_std::test]
    async fn connect_memory() -> anyhow::Result<()> {
        let backend = SqliteBackend::authz("sqlite::memory:".into())
            .await
            .map_err(anyhow::Error::from_boxed)?;
        assert_eq!(backend.url(), "sqlite::memory:");
        Ok(())
    }

    #[async_std::test]
    async fn connect_missing_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let url = format!("sqlite://{}/authz.db", dir.path().display());
        assert!(SqliteBackend::authz(ConnectorOption::from(&url)).await.is_err());
        let backend = SqliteBackend::authz(
            ConnectorOption::from(&url)
                .auto_create_db(true)
        )
            .await
            .map_err(anyhow::Error::from_boxed)?;
        assert_eq!(backend.url(), url);
        // migrations are idempotent on an existing database
        SqliteBackend::authz(ConnectorOption::from(&url))
            .await
            .map_err(anyhow::Error::from_boxed)?;
        Ok(())
    }
}
