use std::fmt;

/// A single CSS declaration value.
///
/// Integers follow React's inline-style rule: non-zero numbers get a `px`
/// suffix, zero is written bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssValue {
    Number(i32),
    Raw(String),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(0) => write!(f, "0"),
            Self::Number(n) => write!(f, "{n}px"),
            Self::Raw(s) => write!(f, "{s}"),
        }
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

/// Inline style map. Declarations keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, CssValue)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing an earlier value for the same property.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<CssValue>) -> Self {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Serialize as the value of an HTML `style` attribute.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
