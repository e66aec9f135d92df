//! URL routing for the sidebar dashboard's content area.

use std::sync::LazyLock;

use webdom::Element;

use crate::progress::{ProgressArgs, axis_label, build_progress_fragment, progress_row};

pub const PROGRESS_LABEL: &str = "Some Label";
pub const PROGRESS_DISPLAY: &str = "10";
pub const PROGRESS_PERCENT: i64 = 10;

/// Builds the content for one route. `None` leaves the content area empty.
pub type Page = fn() -> Option<Element>;

/// Literal path -> page builder, with a 404 fallback.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<(&'static str, Page)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page for the exact path `path`.
    pub fn route(mut self, path: &'static str, page: Page) -> Self {
        self.routes.push((path, page));
        self
    }

    /// Page registered for exactly `path`.
    pub fn resolve(&self, path: &str) -> Option<Page> {
        self.routes
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    /// Content for `path`; unknown paths get the 404 fragment.
    pub fn render(&self, path: &str) -> Option<Element> {
        match self.resolve(path) {
            Some(page) => page(),
            None => Some(not_found(path)),
        }
    }
}

static ROUTES: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new()
        .route("/", page_1_1)
        .route("/page-1/1", page_1_1)
        .route("/page-1/2", page_1_2)
        .route("/page-2/1", page_2_1)
        .route("/page-2/2", page_2_2)
});

/// The sidebar dashboard's route table.
pub fn routes() -> &'static RouteTable {
    &ROUTES
}

/// Content area for `pathname`.
pub fn render(pathname: &str) -> Option<Element> {
    ROUTES.render(pathname)
}

fn page_1_1() -> Option<Element> {
    Some(progress_row(
        PROGRESS_LABEL,
        PROGRESS_DISPLAY,
        PROGRESS_PERCENT,
        Some(axis_label(0, 100)),
    ))
}

fn page_1_2() -> Option<Element> {
    build_progress_fragment(
        ProgressArgs::new()
            .label(PROGRESS_LABEL)
            .actual_value(PROGRESS_DISPLAY)
            .percent_value(PROGRESS_PERCENT)
            .mode("percentage")
            .axis_label(axis_label(0, 20)),
    )
}

fn page_2_1() -> Option<Element> {
    Some(Element::paragraph("Oh cool, this is page 2.1!"))
}

fn page_2_2() -> Option<Element> {
    Some(Element::paragraph("No way! This is page 2.2!"))
}

/// Jumbotron telling the user `pathname` has no page.
pub fn not_found(pathname: &str) -> Element {
    Element::jumbotron().children([
        Element::heading(1, "404: Not found").class("text-danger"),
        Element::hr(),
        Element::paragraph(format!("The pathname {pathname} was not recognised...")),
    ])
}
