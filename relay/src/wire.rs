//! JSON bodies of the event endpoint.

use serde::{Deserialize, Serialize};

/// Browser -> host: something happened to a component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRequest {
    /// Component id.
    pub id: String,
    /// Event kind. Only `click` is understood.
    pub event: String,
}

/// Host -> browser: components to swap in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<ComponentPatch>,
    /// The session is gone; the browser should reload the page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reload: bool,
}

/// Replacement outer HTML for the element with `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentPatch {
    pub id: String,
    pub html: String,
}

impl EventResponse {
    pub fn reload() -> Self {
        Self {
            updates: Vec::new(),
            reload: true,
        }
    }
}
