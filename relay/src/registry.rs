//! Callback registry: the dispatch table from property ids to handlers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use webdom::Prop;

use crate::error::RegistryError;
use crate::ids::{Input, Output, PropId, State};

/// A pure handler. Receives input values then state values, in declaration order.
pub type Handler = Arc<dyn Fn(&[Prop], &[Prop]) -> Prop + Send + Sync>;

/// A registered binding of inputs and states to one output.
#[derive(Clone)]
pub struct Callback {
    pub output: PropId,
    pub inputs: Vec<PropId>,
    pub states: Vec<PropId>,
    handler: Handler,
}

impl Callback {
    pub fn call(&self, inputs: &[Prop], states: &[Prop]) -> Prop {
        (self.handler)(inputs, states)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

/// Registry of all callbacks of an app.
///
/// Callbacks keep their registration order, which is also the order they
/// run in on a session's first render.
#[derive(Debug, Default, Clone)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
    /// Input property -> indices of callbacks listening to it.
    dependents: HashMap<PropId, Vec<usize>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to compute `output` from `inputs` and `states`.
    pub fn register<F>(
        &mut self,
        output: Output,
        inputs: Vec<Input>,
        states: Vec<State>,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&[Prop], &[Prop]) -> Prop + Send + Sync + 'static,
    {
        let output = output.0;
        let inputs: Vec<PropId> = inputs.into_iter().map(|i| i.0).collect();
        let states: Vec<PropId> = states.into_iter().map(|s| s.0).collect();

        if inputs.is_empty() {
            return Err(RegistryError::NoInputs(output));
        }
        if inputs.contains(&output) {
            return Err(RegistryError::CircularDependency(output));
        }
        if self.callbacks.iter().any(|cb| cb.output == output) {
            return Err(RegistryError::DuplicateOutput(output));
        }

        let index = self.callbacks.len();
        for input in &inputs {
            self.dependents.entry(input.clone()).or_default().push(index);
        }

        self.callbacks.push(Callback {
            output,
            inputs,
            states,
            handler: Arc::new(handler),
        });
        Ok(())
    }

    /// Indices of the callbacks fired when `prop` changes.
    pub fn dependents(&self, prop: &PropId) -> &[usize] {
        self.dependents.get(prop).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&Callback> {
        self.callbacks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Callback> {
        self.callbacks.iter()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Components whose `n_clicks` is an input of some callback.
    pub fn click_targets(&self) -> impl Iterator<Item = &str> {
        self.dependents
            .keys()
            .filter(|id| id.property == "n_clicks")
            .map(|id| id.component.as_str())
    }
}
