//! Layout of the sidebar dashboard.

use webdom::{Element, Style};

/// Bootstrap 4 theme.
pub const BOOTSTRAP_CSS: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.5.0/css/bootstrap.min.css";
/// Chevron icons of the submenu headers.
pub const FONT_AWESOME_CSS: &str = "https://use.fontawesome.com/releases/v5.8.1/css/all.css";

/// Location component; its `pathname` drives the router.
pub const LOCATION_ID: &str = "url";
/// Fixed sidebar holding the submenus.
pub const SIDEBAR_ID: &str = "sidebar";
/// Area the router fills.
pub const CONTENT_ID: &str = "page-content";

/// Submenus in the sidebar, with the pages each one links to.
pub const SUBMENUS: [(usize, [(&str, &str); 2]); 2] = [
    (1, [("Page 1.1", "/page-1/1"), ("Page 1.2", "/page-1/2")]),
    (2, [("Page 2.1", "/page-2/1"), ("Page 2.2", "/page-2/2")]),
];

/// Id of submenu `index`'s clickable header.
pub fn submenu_id(index: usize) -> String {
    format!("submenu-{index}")
}

/// Id of the collapse holding submenu `index`'s links.
pub fn collapse_id(index: usize) -> String {
    format!("submenu-{index}-collapse")
}

/// Fixed to the left edge, below the top navbar.
pub fn sidebar_style() -> Style {
    Style::new()
        .set("position", "fixed")
        .set("top", 12)
        .set("left", 0)
        .set("bottom", 0)
        .set("width", "16rem")
        .set("padding", "2rem 1rem")
        .set("background-color", "#f8f9fa")
}

/// Offsets the content to the right of the sidebar.
pub fn content_style() -> Style {
    Style::new()
        .set("margin-left", "18rem")
        .set("margin-right", "2rem")
        .set("padding", "2rem 1rem")
}

/// Sticky top bar with the dashboard title and a single link.
pub fn navbar() -> Element {
    Element::navbar()
        .prop("sticky", "top")
        .class("mb-5")
        .child(Element::container().children([
            Element::navbar_brand("Dashboard Title").prop("href", "#"),
            Element::nav()
                .class("navbar-nav ml-auto")
                .child(Element::nav_item().child(Element::nav_link("Link", "#"))),
        ]))
}

/// Header row plus the collapse holding the submenu's links.
pub fn submenu(index: usize, pages: &[(&str, &str)]) -> [Element; 2] {
    let header = Element::list_item().id(submenu_id(index)).child(
        Element::row().class("my-1").children([
            Element::col().text(format!("Menu {index}")),
            Element::col()
                .width("auto")
                .child(Element::icon("fas fa-chevron-right mr-3")),
        ]),
    );

    let links = Element::collapse().id(collapse_id(index)).children(
        pages
            .iter()
            .map(|(label, href)| Element::nav_link(*label, *href)),
    );

    [header, links]
}

/// Title, lead text and the vertical nav of submenus.
pub fn sidebar() -> Element {
    let menus = SUBMENUS
        .into_iter()
        .flat_map(|(index, pages)| submenu(index, &pages));

    Element::div()
        .id(SIDEBAR_ID)
        .style(sidebar_style())
        .children([
            Element::heading(2, "Sidebar").class("display-4"),
            Element::hr(),
            Element::paragraph("A sidebar with collapsible navigation links").class("lead"),
            Element::nav().prop("vertical", true).children(menus),
        ])
}

/// Empty content area, filled by the router callback.
pub fn content() -> Element {
    Element::div().id(CONTENT_ID).style(content_style())
}

/// Location tracker, navbar, sidebar and content area.
pub fn sidebar_layout() -> Element {
    Element::div().children([
        Element::location().id(LOCATION_ID),
        navbar(),
        sidebar(),
        content(),
    ])
}
