use authzcore::platform::AuthzPlatform;
use std::sync::Arc;

use crate::error::Error;

#[derive(Default)]
pub struct Builder {
    authz_platform: Option<Arc<dyn AuthzPlatform>>,
}

/// The authorization engine.
///
/// Decisions are made against the injected `AuthzPlatform`; the engine
/// itself holds no other state, so a single instance is meant to be
/// shared across all concurrently served requests.
pub struct Platform {
    authz_platform: Arc<dyn AuthzPlatform>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authz_platform(mut self, val: impl AuthzPlatform + 'static) -> Self {
        self.authz_platform = Some(Arc::new(val));
        self
    }

    pub fn boxed_authz_platform(mut self, val: Arc<dyn AuthzPlatform>) -> Self {
        self.authz_platform = Some(val);
        self
    }

    pub fn build(self) -> Result<Arc<Platform>, Error> {
        Ok(Arc::new(Platform {
            authz_platform: self.authz_platform
                .ok_or(Error::Misconfiguration("missing required argument authz_platform"))?,
        }))
    }
}

impl Platform {
    pub fn authz_platform(&self) -> &dyn AuthzPlatform {
        self.authz_platform.as_ref()
    }
}

mod impls;
