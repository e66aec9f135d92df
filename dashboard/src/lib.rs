//! Bootstrap dashboards served by `relay`.

pub mod apps;
pub mod callbacks;
pub mod config;
pub mod layout;
pub mod paths;
pub mod progress;
pub mod router;

pub use apps::AppKind;
