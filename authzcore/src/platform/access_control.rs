use crate::{
    platform::PlatformUrl,
    ac::traits::PermissionBackend,
};

/// AuthzPlatform - Authorization Platform
///
/// This platform provides read access to the persisted users, roles,
/// role assignments and permissions that authorization decisions are
/// made against.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
pub trait AuthzPlatform: PermissionBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn AuthzPlatform;
}

pub trait DefaultAuthzPlatform: AuthzPlatform {}

impl<P: PermissionBackend

    + PlatformUrl

    + DefaultAuthzPlatform

    + Send
    + Sync
> AuthzPlatform for P {
    fn as_dyn(&self) -> &(dyn AuthzPlatform) {
        self
    }
}
