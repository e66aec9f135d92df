use relay::App;
use webdom::Element;

use crate::layout::BOOTSTRAP_CSS;

pub const DATASOURCE: &str = "datatarget2020";

fn brand_row(label: &str) -> Element {
    Element::row()
        .prop("no_gutters", true)
        .child(Element::navbar_brand(label).class("col-md-2 bg-light"))
}

/// Navbar with the "Data Depth" and "Data Breadth" brands stacked in one column.
pub fn datatarget_layout() -> Element {
    let navbar = Element::navbar().child(Element::col().children([
        Element::anchor("https://plot.ly").child(brand_row("Data Depth")),
        brand_row("Data Breadth"),
    ]));

    Element::div().child(
        Element::div()
            .id(format!("{DATASOURCE}_other graphs"))
            .child(navbar),
    )
}

/// Static page: no callbacks, same document for every path.
pub fn datatarget_app() -> App {
    App::new("Data Target")
        .stylesheet(BOOTSTRAP_CSS)
        .layout(datatarget_layout())
}
