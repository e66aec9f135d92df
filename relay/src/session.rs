//! Per-browser UI state and property-change dispatch.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::debug;
use webdom::{Element, Prop, find_element, find_element_mut};

use crate::error::DispatchError;
use crate::ids::PropId;
use crate::registry::{Callback, CallbackRegistry};

/// The host-managed copy of an app's layout for one browser.
///
/// Callbacks never see the session; they get the current values of their
/// inputs and states and return the new output value, which the session
/// writes back into its tree.
#[derive(Debug, Clone)]
pub struct Session {
    root: Element,
    last_seen: Instant,
}

impl Session {
    /// Create a session from a fresh copy of the layout.
    ///
    /// Elements whose clicks feed a callback are marked clickable.
    pub fn new(mut layout: Element, registry: &CallbackRegistry) -> Self {
        let targets: HashSet<&str> = registry.click_targets().collect();
        layout.walk_mut(&mut |el| {
            if el.id.as_deref().is_some_and(|id| targets.contains(id)) {
                el.clickable = true;
            }
        });

        Self {
            root: layout,
            last_seen: Instant::now(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn read(&self, id: &PropId) -> Result<Prop, DispatchError> {
        find_element(&self.root, &id.component)
            .map(|el| el.get_prop(&id.property))
            .ok_or_else(|| DispatchError::UnknownComponent(id.component.clone()))
    }

    /// Write a property without firing any callback.
    pub fn write(&mut self, id: &PropId, value: Prop) -> Result<(), DispatchError> {
        let el = find_element_mut(&mut self.root, &id.component)
            .ok_or_else(|| DispatchError::UnknownComponent(id.component.clone()))?;
        el.set_prop(&id.property, value)
            .map_err(|source| DispatchError::Property {
                id: id.clone(),
                source,
            })
    }

    /// Run every callback once, in registration order.
    ///
    /// Returns the outputs written.
    pub fn initialize(&mut self, registry: &CallbackRegistry) -> Result<Vec<PropId>, DispatchError> {
        let mut written = Vec::with_capacity(registry.len());
        for callback in registry.iter() {
            self.fire(callback)?;
            written.push(callback.output.clone());
        }
        Ok(written)
    }

    /// Set `changed` to `value` and run every callback that depends on it,
    /// directly or through another callback's output.
    ///
    /// Each callback runs at most once per dispatch, breadth first. Returns
    /// the outputs written, in the order they were written.
    pub fn dispatch(
        &mut self,
        registry: &CallbackRegistry,
        changed: &PropId,
        value: Prop,
    ) -> Result<Vec<PropId>, DispatchError> {
        self.write(changed, value)?;
        self.touch();

        let mut queue = VecDeque::from([changed.clone()]);
        let mut fired = HashSet::new();
        let mut written = Vec::new();

        while let Some(prop) = queue.pop_front() {
            for &index in registry.dependents(&prop) {
                if !fired.insert(index) {
                    continue;
                }
                let Some(callback) = registry.get(index) else {
                    continue;
                };
                self.fire(callback)?;
                written.push(callback.output.clone());
                queue.push_back(callback.output.clone());
            }
        }

        debug!("Dispatch of {} wrote {} output(s)", changed, written.len());
        Ok(written)
    }

    /// Record a click on `component` by bumping its `n_clicks`.
    pub fn click(
        &mut self,
        registry: &CallbackRegistry,
        component: &str,
    ) -> Result<Vec<PropId>, DispatchError> {
        let id = PropId::new(component, "n_clicks");
        let clicks = self.read(&id)?.as_int().unwrap_or(0);
        self.dispatch(registry, &id, Prop::Int(clicks + 1))
    }

    fn fire(&mut self, callback: &Callback) -> Result<(), DispatchError> {
        let inputs = self.read_all(&callback.inputs)?;
        let states = self.read_all(&callback.states)?;
        let value = callback.call(&inputs, &states);
        debug!("Callback wrote {}", callback.output);
        self.write(&callback.output, value)
    }

    fn read_all(&self, ids: &[PropId]) -> Result<Vec<Prop>, DispatchError> {
        ids.iter().map(|id| self.read(id)).collect()
    }
}
