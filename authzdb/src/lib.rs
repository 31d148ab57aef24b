use authzcore::platform::{AuthzPlatform, ConnectorOption};
#[cfg(feature = "sqlite")]
use authzdb_sqlite::SqliteBackend;
use std::sync::Arc;

pub struct Backend;

#[derive(Clone, Debug, PartialEq)]
pub struct Error(String);

#[derive(Debug)]
enum BackendKind {
    Sqlite,
}

mod display {
    use super::{BackendKind, Error};
    use std::fmt::{Display, Formatter, Result};

    impl Display for BackendKind {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                Self::Sqlite => "sqlite".fmt(f),
            }
        }
    }

    impl Display for Error {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            self.0.fmt(f)
        }
    }

    impl std::error::Error for Error {}
}

impl TryFrom<&str> for BackendKind {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.split(':').next() {
            Some("sqlite") => Ok(BackendKind::Sqlite),
            _ => Err(Error(format!("The connection string {s:?} is unsupported.")))
        }
    }
}

impl Backend {
    /// Connects to the permission data source named by the url of the
    /// provided options, applying the schema where needed.
    pub async fn authz(
        opts: impl Into<ConnectorOption> + Send,
    ) -> Result<Arc<dyn AuthzPlatform>, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let opts = opts.into();
        match BackendKind::try_from(opts.url.as_str()) {
            #[cfg(feature = "sqlite")]
            Ok(BackendKind::Sqlite) => {
                log::debug!("connecting to sqlite permission store {}", &opts.url);
                Ok(Arc::new(
                    SqliteBackend::connect(opts).await?
                        .migrate_authz()
                        .await?
                ))
            }
            #[cfg(not(feature = "sqlite"))]
            Ok(s) => Err(Box::new(Error(format!(
                "The feature {s:?} must be enabled for authzdb in order to connect to {:?}",
                opts.url,
            )))),
            Err(e) => Err(Box::new(e)),
        }
    }
}

#[cfg(test)]
mod testing {
    #[cfg(feature = "sqlite")]
    use authzcore::{
        ac::traits::PermissionBackend,
        platform::PlatformUrl,
    };
    use crate::Backend;

    #[async_std::test]
    async fn smoke() {
        assert!(Backend::authz("unsupported").await.is_err());
        assert!(Backend::authz("postgres://localhost/authz").await.is_err());
    }

    #[cfg(feature = "sqlite")]
    #[async_std::test]
    async fn smoke_sqlite() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let platform = Backend::authz("sqlite::memory:").await?;
        assert_eq!(platform.url(), "sqlite::memory:");
        assert!(!platform.exists_grant(1, "Beer", "view").await?);
        assert!(platform.distinct_classes_for_user(1).await?.is_empty());
        assert!(platform.methods_for_user_and_class(1, "Beer").await?.is_empty());
        Ok(())
    }
}
