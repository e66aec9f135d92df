/// Component kind. Decides the HTML tag and the Bootstrap base classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Container,
    Row,
    Col,
    Nav,
    Navbar,
    NavbarBrand,
    NavItem,
    NavLink,
    Anchor,
    Heading(u8),
    Paragraph,
    Hr,
    ListItem,
    Icon,
    Collapse,
    Progress,
    Jumbotron,
    /// Tracks the browser location. Holds `pathname`, renders nothing.
    Location,
}

impl Tag {
    /// HTML tag name, or `None` for components without markup.
    pub fn html_tag(self, has_href: bool) -> Option<&'static str> {
        let tag = match self {
            Self::Div
            | Self::Container
            | Self::Row
            | Self::Col
            | Self::Collapse
            | Self::Progress
            | Self::Jumbotron => "div",
            Self::Nav => "ul",
            Self::Navbar => "nav",
            Self::NavbarBrand if has_href => "a",
            Self::NavbarBrand => "span",
            Self::NavItem | Self::ListItem => "li",
            Self::NavLink | Self::Anchor => "a",
            Self::Heading(level) => match level {
                0 | 1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
            Self::Paragraph => "p",
            Self::Hr => "hr",
            Self::Icon => "i",
            Self::Location => return None,
        };
        Some(tag)
    }

    pub fn is_void(self) -> bool {
        matches!(self, Self::Hr)
    }

    /// Whether the `href` prop is rendered as an attribute.
    pub fn links(self) -> bool {
        matches!(self, Self::NavLink | Self::Anchor | Self::NavbarBrand)
    }
}
