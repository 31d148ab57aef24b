pub mod agent;
pub mod context;
pub mod permission;
pub mod traits;
pub mod user;

pub use self::permission::{
    Permission,
    WILDCARD_METHOD,
};
