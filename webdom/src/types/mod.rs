mod enums;
mod style;

pub use enums::Tag;
pub use style::{CssValue, Style};
