pub mod element;
pub mod render;
pub mod types;

pub use element::{find_element, find_element_mut, Content, Element, Prop, PropError};
pub use render::{render_document, render_html};
pub use types::*;
