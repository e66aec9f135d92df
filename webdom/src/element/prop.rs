use super::Element;

/// A component property value, as read and written by callbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Prop {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Element(Box<Element>),
    Elements(Vec<Element>),
}

impl Prop {
    /// Falsy values are null, `false`, `0`, `""` and empty lists.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Str(s) => !s.is_empty(),
            Self::Element(_) => true,
            Self::Elements(e) => !e.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Prop {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Prop {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Element> for Prop {
    fn from(value: Element) -> Self {
        Self::Element(Box::new(value))
    }
}

impl From<Option<Element>> for Prop {
    fn from(value: Option<Element>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<Vec<Element>> for Prop {
    fn from(value: Vec<Element>) -> Self {
        Self::Elements(value)
    }
}

/// Errors raised when writing a property by name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    #[error("property '{0}' is read-only")]
    ReadOnly(String),
}
