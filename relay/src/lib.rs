//! Host runtime for callback-driven dashboards.
//!
//! An [`App`] pairs a `webdom` layout with callbacks that compute one
//! component property from others. The [`Server`] gives every browser its
//! own [`Session`] (a copy of the layout), dispatches property changes to
//! the callbacks bound to them and sends back re-rendered components.

pub mod app;
pub mod config;
pub mod error;
pub mod ids;
pub mod registry;
pub mod server;
pub mod session;
pub mod wire;

pub use app::App;
pub use config::ServerConfig;
pub use error::{DispatchError, RegistryError, ServerError};
pub use ids::{Input, Output, PropId, State};
pub use registry::{Callback, CallbackRegistry, Handler};
pub use server::{BoundServer, EVENT_PATH, SESSION_COOKIE, Server};
pub use session::Session;
pub use wire::{ComponentPatch, EventRequest, EventResponse};
