//! Property identifiers used to bind callbacks.

use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// A `(component id, property name)` pair, written `component.property`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropId {
    pub component: String,
    pub property: String,
}

impl PropId {
    pub fn new(component: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            property: property.into(),
        }
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.property)
    }
}

impl FromStr for PropId {
    type Err = RegistryError;

    /// Splits on the last `.`, so component ids may themselves contain dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once('.') {
            Some((component, property)) if !component.is_empty() && !property.is_empty() => {
                Ok(Self::new(component, property))
            }
            _ => Err(RegistryError::InvalidPropId(s.to_string())),
        }
    }
}

macro_rules! prop_role {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub PropId);

        impl $name {
            pub fn new(component: impl Into<String>, property: impl Into<String>) -> Self {
                Self(PropId::new(component, property))
            }
        }

        impl From<PropId> for $name {
            fn from(id: PropId) -> Self {
                Self(id)
            }
        }
    };
}

prop_role!(
    /// The property a callback writes.
    Output
);
prop_role!(
    /// A property whose changes fire the callback.
    Input
);
prop_role!(
    /// A property passed to the callback without triggering it.
    State
);
