//! Error types

use webdom::PropError;

use crate::ids::PropId;

/// Errors raised while registering callbacks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Every output may be written by one callback only.
    #[error("Output {0} is already bound to a callback")]
    DuplicateOutput(PropId),

    /// A callback without inputs would never fire.
    #[error("Callback for {0} has no inputs")]
    NoInputs(PropId),

    /// The output is also one of the callback's own inputs.
    #[error("Callback for {0} depends on its own output")]
    CircularDependency(PropId),

    /// Property id not in `component.property` form.
    #[error("Invalid property id: {0:?}")]
    InvalidPropId(String),
}

/// Errors raised while dispatching a property change inside a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No element with this id exists in the session's layout.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The element rejected the property write.
    #[error("Cannot write {id}: {source}")]
    Property {
        id: PropId,
        #[source]
        source: PropError,
    },
}

/// Errors raised by the HTTP host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a request body.
    #[error("Failed to read request body: {0}")]
    Body(#[from] hyper::Error),

    /// Request body was not the expected JSON.
    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    /// Unsupported event kind in an event request.
    #[error("Unsupported event: {0}")]
    UnsupportedEvent(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
