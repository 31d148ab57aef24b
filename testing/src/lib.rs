#[cfg(feature = "ac")]
pub mod ac;
pub mod core;
#[cfg(feature = "model")]
pub mod model;

pub fn is_send_sync<T: Send + Sync>(_: T) {}
