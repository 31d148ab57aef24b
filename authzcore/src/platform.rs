mod access_control;
mod connector;
pub use access_control::{DefaultAuthzPlatform, AuthzPlatform};
pub use connector::{ConnectorOption, PlatformConnector};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}
