//! HTML rendering of element trees.
//!
//! Elements map onto Bootstrap 4 markup: each [`Tag`] contributes its base
//! classes and any tag-specific attributes, followed by the element's own
//! class name, inline style and content.

mod document;

pub use document::render_document;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::element::{Content, Element, Prop};
use crate::types::Tag;

/// Render an element and its descendants to an HTML fragment.
pub fn render_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, el: &Element) {
    let href = el.props.get("href").and_then(Prop::as_str);
    let Some(tag) = el.tag.html_tag(href.is_some()) else {
        return;
    };

    out.push('<');
    out.push_str(tag);

    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }

    let classes = class_list(el);
    if !classes.is_empty() {
        write_attr(out, "class", &classes);
    }

    if !el.style.is_empty() {
        write_attr(out, "style", &el.style.to_css());
    }

    if el.tag.links() {
        if let Some(href) = href {
            write_attr(out, "href", href);
        }
    }

    if el.clickable {
        if let Some(id) = &el.id {
            write_attr(out, "data-relay-click", id);
        }
    }

    out.push('>');

    if el.tag.is_void() {
        return;
    }

    if el.tag == Tag::Progress {
        write_progress_bar(out, el);
    } else {
        write_content(out, &el.content);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_content(out: &mut String, content: &Content) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&encode_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }
}

fn write_progress_bar(out: &mut String, el: &Element) {
    let value = el
        .props
        .get("value")
        .and_then(Prop::as_int)
        .unwrap_or(0)
        .clamp(0, 100);

    out.push_str("<div class=\"progress-bar\" role=\"progressbar\"");
    write_attr(out, "style", &format!("width: {value}%"));
    write_attr(out, "aria-valuenow", &value.to_string());
    write_attr(out, "aria-valuemin", "0");
    write_attr(out, "aria-valuemax", "100");
    out.push('>');
    write_content(out, &el.content);
    out.push_str("</div>");
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

/// Base classes of the tag, then the element's own class name.
fn class_list(el: &Element) -> String {
    let prop = |name: &str| el.props.get(name).cloned().unwrap_or_default();

    let mut classes: Vec<String> = Vec::new();
    match el.tag {
        Tag::Container => classes.push("container".into()),
        Tag::Row => {
            classes.push("row".into());
            if prop("no_gutters").is_truthy() {
                classes.push("no-gutters".into());
            }
        }
        Tag::Col => match prop("width").as_str() {
            Some(width) => classes.push(format!("col-{width}")),
            None => classes.push("col".into()),
        },
        Tag::Nav => {
            classes.push("nav".into());
            if prop("vertical").is_truthy() {
                classes.push("flex-column".into());
            }
        }
        Tag::Navbar => {
            classes.push("navbar navbar-expand-md navbar-light bg-light".into());
            if let Some(sticky) = prop("sticky").as_str() {
                classes.push(format!("sticky-{sticky}"));
            }
        }
        Tag::NavbarBrand => classes.push("navbar-brand".into()),
        Tag::NavItem => classes.push("nav-item".into()),
        Tag::NavLink => {
            classes.push("nav-link".into());
            if prop("active").is_truthy() {
                classes.push("active".into());
            }
        }
        Tag::Collapse => {
            classes.push("collapse".into());
            if prop("is_open").is_truthy() {
                classes.push("show".into());
            }
        }
        Tag::Progress => classes.push("progress".into()),
        Tag::Jumbotron => classes.push("jumbotron".into()),
        _ => {}
    }

    if let Some(class_name) = el.class_name.as_deref().filter(|c| !c.is_empty()) {
        classes.push(class_name.to_string());
    }

    classes.join(" ")
}
