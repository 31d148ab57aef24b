use async_trait::async_trait;
use std::error::Error;

use super::*;

/// Options for connecting to the relational backend holding the
/// permission data.
#[derive(Clone, Debug)]
pub struct ConnectorOption {
    pub auto_create_db: bool,
    pub url: String,
    /// Per-connection capacity of the prepared statement cache.
    pub statement_cache_capacity: usize,
}

impl Default for ConnectorOption {
    fn default() -> Self {
        Self {
            auto_create_db: false,
            url: String::new(),
            statement_cache_capacity: 100,
        }
    }
}

impl ConnectorOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_create_db(mut self, auto_create_db: bool) -> Self {
        self.auto_create_db = auto_create_db;
        self
    }

    pub fn url(mut self, url: String) -> Self {
        self.url = url;
        self
    }

    pub fn statement_cache_capacity(mut self, capacity: usize) -> Self {
        self.statement_cache_capacity = capacity;
        self
    }
}

impl<T> From<T> for ConnectorOption
where
    T: ToString
{
    fn from(v: T) -> Self {
        Self::new().url(v.to_string())
    }
}

#[async_trait]
pub trait PlatformConnector {
    async fn authz(opts: ConnectorOption) -> Result<impl AuthzPlatform, Box<dyn Error + Send + Sync + 'static>>;
}

#[cfg(test)]
mod test {
    use super::ConnectorOption;

    #[test]
    fn builder() {
        let opts = ConnectorOption::from("sqlite::memory:");
        assert_eq!(opts.url, "sqlite::memory:");
        assert!(!opts.auto_create_db);
        assert_eq!(opts.statement_cache_capacity, 100);

        let opts = opts
            .auto_create_db(true)
            .statement_cache_capacity(3);
        assert!(opts.auto_create_db);
        assert_eq!(opts.statement_cache_capacity, 3);
    }
}
