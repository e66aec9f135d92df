use std::collections::BTreeMap;

use super::{Content, Prop, PropError};
use crate::types::{CssValue, Style, Tag};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Visual
    pub class_name: Option<String>,
    pub style: Style,

    /// Component-specific properties (`href`, `is_open`, `width`, ...).
    pub props: BTreeMap<String, Prop>,

    // Interaction
    /// Set by the host runtime when a callback listens to this element's clicks.
    pub clickable: bool,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn container() -> Self {
        Self::new(Tag::Container)
    }

    pub fn row() -> Self {
        Self::new(Tag::Row)
    }

    pub fn col() -> Self {
        Self::new(Tag::Col)
    }

    /// Vertical or horizontal list of nav links.
    pub fn nav() -> Self {
        Self::new(Tag::Nav)
    }

    pub fn navbar() -> Self {
        Self::new(Tag::Navbar)
    }

    pub fn navbar_brand(label: impl Into<String>) -> Self {
        Self::new(Tag::NavbarBrand).text(label)
    }

    pub fn nav_item() -> Self {
        Self::new(Tag::NavItem)
    }

    pub fn nav_link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(Tag::NavLink).text(label).prop("href", Prop::Str(href.into()))
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(Tag::Anchor).prop("href", Prop::Str(href.into()))
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(Tag::Heading(level)).text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Tag::Paragraph).text(text)
    }

    pub fn hr() -> Self {
        Self::new(Tag::Hr)
    }

    pub fn list_item() -> Self {
        Self::new(Tag::ListItem)
    }

    pub fn icon(class_name: impl Into<String>) -> Self {
        Self::new(Tag::Icon).class(class_name)
    }

    /// Container whose children are only shown while `is_open` is true.
    pub fn collapse() -> Self {
        Self::new(Tag::Collapse).prop("is_open", false)
    }

    /// Progress bar showing `label` over a bar filled to `value` percent.
    pub fn progress(label: impl Into<String>, value: i64) -> Self {
        Self::new(Tag::Progress).text(label).prop("value", value)
    }

    pub fn jumbotron() -> Self {
        Self::new(Tag::Jumbotron)
    }

    pub fn location() -> Self {
        Self::new(Tag::Location).prop("pathname", Prop::Null)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Visual
    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Add a single style declaration.
    pub fn css(mut self, property: impl Into<String>, value: impl Into<CssValue>) -> Self {
        self.style = self.style.set(property, value);
        self
    }

    // Properties
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Prop>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Column width, `"auto"` or a span out of 12.
    pub fn width(self, width: impl Into<String>) -> Self {
        self.prop("width", Prop::Str(width.into()))
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Read a property by its callback-facing name.
    pub fn get_prop(&self, name: &str) -> Prop {
        match name {
            "id" => self.id.clone().map_or(Prop::Null, Prop::Str),
            "className" => self.class_name.clone().map_or(Prop::Null, Prop::Str),
            "children" => match &self.content {
                Content::None => Prop::Null,
                Content::Text(text) => Prop::Str(text.clone()),
                Content::Children(children) => Prop::Elements(children.clone()),
            },
            _ => self.props.get(name).cloned().unwrap_or_default(),
        }
    }

    /// Write a property by its callback-facing name.
    ///
    /// Writing `children` replaces the whole content subtree.
    pub fn set_prop(&mut self, name: &str, value: Prop) -> Result<(), PropError> {
        match name {
            "id" => return Err(PropError::ReadOnly(name.to_string())),
            "className" => {
                self.class_name = match value {
                    Prop::Null => None,
                    Prop::Str(s) => Some(s),
                    other => Some(prop_text(&other)),
                };
            }
            "children" => {
                self.content = match value {
                    Prop::Null => Content::None,
                    Prop::Element(element) => Content::Children(vec![*element]),
                    Prop::Elements(children) => Content::Children(children),
                    other => Content::Text(prop_text(&other)),
                };
            }
            _ => {
                self.props.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    // Children
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Visit this element and every descendant, depth first.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        if let Content::Children(children) = &mut self.content {
            for child in children {
                child.walk_mut(f);
            }
        }
    }
}

/// Text shown when a scalar property is used as content.
fn prop_text(value: &Prop) -> String {
    match value {
        Prop::Null => String::new(),
        Prop::Bool(b) => b.to_string(),
        Prop::Int(n) => n.to_string(),
        Prop::Str(s) => s.clone(),
        Prop::Element(_) | Prop::Elements(_) => String::new(),
    }
}
