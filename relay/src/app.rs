//! App definition: layout, stylesheets and callbacks.

use webdom::{Element, Prop, Tag};

use crate::error::RegistryError;
use crate::ids::{Input, Output, PropId, State};
use crate::registry::CallbackRegistry;
use crate::session::Session;

/// A dashboard app served by the host.
///
/// # Example
///
/// ```
/// use relay::{App, Input, Output};
/// use webdom::{Element, Prop};
///
/// let mut app = App::new("Demo").layout(
///     Element::div().children([
///         Element::location().id("url"),
///         Element::div().id("content"),
///     ]),
/// );
/// app.callback(
///     Output::new("content", "children"),
///     vec![Input::new("url", "pathname")],
///     vec![],
///     |inputs, _| inputs.first().cloned().unwrap_or_default(),
/// )
/// .unwrap();
/// assert_eq!(app.location().map(|id| id.to_string()), Some("url.pathname".into()));
/// ```
#[derive(Debug, Clone)]
pub struct App {
    title: String,
    stylesheets: Vec<String>,
    layout: Element,
    registry: CallbackRegistry,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheets: Vec::new(),
            layout: Element::div(),
            registry: CallbackRegistry::new(),
        }
    }

    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    pub fn layout(mut self, layout: Element) -> Self {
        self.layout = layout;
        self
    }

    /// Register a callback. See [`CallbackRegistry::register`].
    pub fn callback<F>(
        &mut self,
        output: Output,
        inputs: Vec<Input>,
        states: Vec<State>,
        handler: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: Fn(&[Prop], &[Prop]) -> Prop + Send + Sync + 'static,
    {
        self.registry.register(output, inputs, states, handler)?;
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// The `pathname` property of the layout's location component, if any.
    pub fn location(&self) -> Option<PropId> {
        find_location(&self.layout).map(|id| PropId::new(id, "pathname"))
    }

    /// A new session over a fresh copy of the layout.
    pub fn new_session(&self) -> Session {
        Session::new(self.layout.clone(), &self.registry)
    }
}

fn find_location(el: &Element) -> Option<&str> {
    if el.tag == Tag::Location
        && let Some(id) = el.id.as_deref()
    {
        return Some(id);
    }
    el.content.children().iter().find_map(find_location)
}
